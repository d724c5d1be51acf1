//! Detail dispatcher: which sub-records a row produces for its equipment type

use super::{
    columns::{parse_bool, parse_date, parse_opt_i32, resolve, resolve_text},
    loader::Row,
};
use crate::models::{
    enums::EquipmentType,
    lab_equipment::{
        ElectricalDetails, EquipmentDetail, NetworkDetails, ProjectorDetails, ServerDetails,
    },
};

const IP: &[&str] = &["ip_address", "ip"];
const MAC: &[&str] = &["mac_address", "mac"];
const FIRMWARE: &[&str] = &["firmware_version", "firmware"];
const PORTS: &[&str] = &["number_of_ports", "ports"];
const RACK_SIZE: &[&str] = &["rack_unit_size", "rack_size"];
const MANAGED: &[&str] = &["managed_switch", "managed"];
const BANDWIDTH: &[&str] = &["bandwidth_capacity", "bandwidth"];
const POWER: &[&str] = &["power_rating", "power"];

const CPU: &[&str] = &["cpu_model", "cpu"];
const TOTAL_RAM: &[&str] = &["total_ram", "ram"];
const TOTAL_STORAGE: &[&str] = &["total_storage", "storage"];
const RAID: &[&str] = &["raid_config", "raid"];
const VIRTUALIZATION: &[&str] = &["virtualization_enabled", "virtualization"];
const OS: &[&str] = &["operating_system", "os"];

const RESOLUTION: &[&str] = &["resolution"];
const BRIGHTNESS: &[&str] = &["brightness_lumens", "brightness", "lumens"];
const THROW: &[&str] = &["throw_type", "throw"];
const HDMI: &[&str] = &["hdmi_ports", "hdmi"];

const VOLTAGE: &[&str] = &["voltage"];
const INVERTER: &[&str] = &["inverter_type", "inverter"];
const ENERGY: &[&str] = &["energy_rating", "energy"];
const SERVICE_DUE: &[&str] = &["service_due_date", "service_due"];

/// Details to attach for `ty`, in creation order.
///
/// Each kind is only produced when the row carries a usable value in at
/// least one of its gating columns, so no all-empty sub-record is ever
/// created. At most one record per kind.
pub fn details_for(ty: EquipmentType, row: &Row) -> Vec<EquipmentDetail> {
    let mut details = Vec::new();

    // SERVER is accepted by two detail tables and gets both records when the
    // row fills both column sets; every other type has a single kind.
    if ty.is_networked_kind() {
        details.extend(network_details(row).map(EquipmentDetail::Network));
    }
    match ty {
        EquipmentType::Server => {
            details.extend(server_details(row).map(EquipmentDetail::Server));
        }
        EquipmentType::Projector => {
            details.extend(projector_details(row).map(EquipmentDetail::Projector));
        }
        EquipmentType::Ac | EquipmentType::Fan | EquipmentType::Light => {
            details.extend(electrical_details(row).map(EquipmentDetail::Electrical));
        }
        _ => {}
    }

    details
}

fn has_any(row: &Row, columns: &[&[&str]]) -> bool {
    columns.iter().any(|aliases| resolve(row, aliases).is_some())
}

fn network_details(row: &Row) -> Option<NetworkDetails> {
    if !has_any(row, &[IP, MAC]) {
        return None;
    }
    Some(NetworkDetails {
        ip_address: resolve_text(row, IP),
        mac_address: resolve_text(row, MAC),
        firmware_version: resolve_text(row, FIRMWARE),
        number_of_ports: parse_opt_i32(resolve(row, PORTS)),
        rack_unit_size: parse_opt_i32(resolve(row, RACK_SIZE)),
        managed_switch: parse_bool(resolve(row, MANAGED)),
        bandwidth_capacity: resolve_text(row, BANDWIDTH),
        power_rating: resolve_text(row, POWER),
    })
}

fn server_details(row: &Row) -> Option<ServerDetails> {
    if !has_any(row, &[CPU, TOTAL_RAM, TOTAL_STORAGE]) {
        return None;
    }
    Some(ServerDetails {
        cpu_model: resolve_text(row, CPU),
        total_ram: resolve_text(row, TOTAL_RAM),
        total_storage: resolve_text(row, TOTAL_STORAGE),
        raid_config: resolve_text(row, RAID),
        virtualization_enabled: parse_bool(resolve(row, VIRTUALIZATION)),
        operating_system: resolve_text(row, OS),
    })
}

fn projector_details(row: &Row) -> Option<ProjectorDetails> {
    // brightness only counts once it parses as a number
    let resolution = resolve_text(row, RESOLUTION);
    let brightness_lumens = parse_opt_i32(resolve(row, BRIGHTNESS));
    if resolution.is_none() && brightness_lumens.is_none() {
        return None;
    }
    Some(ProjectorDetails {
        resolution,
        brightness_lumens,
        throw_type: resolve_text(row, THROW),
        hdmi_ports: parse_opt_i32(resolve(row, HDMI)),
    })
}

fn electrical_details(row: &Row) -> Option<ElectricalDetails> {
    if !has_any(row, &[POWER, VOLTAGE]) {
        return None;
    }
    Some(ElectricalDetails {
        power_rating: resolve_text(row, POWER),
        voltage: resolve_text(row, VOLTAGE),
        inverter_type: parse_bool(resolve(row, INVERTER)),
        energy_rating: resolve_text(row, ENERGY),
        service_due_date: parse_date(resolve(row, SERVICE_DUE)),
    })
}
