//! Lab equipment model and its per-type detail sub-records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{EquipmentCategory, EquipmentStatus, EquipmentType};

/// Non-PC hardware in a lab. `(lab_id, equipment_code)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LabEquipment {
    pub id: i32,
    pub lab_id: i32,
    /// Internal tracking ID (e.g. LAB1-SW-01)
    pub equipment_code: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub category: EquipmentCategory,
    #[sqlx(try_from = "String")]
    pub equipment_type: EquipmentType,
    pub brand: Option<String>,
    pub model_name: Option<String>,
    pub quantity: i32,
    #[sqlx(try_from = "String")]
    pub status: EquipmentStatus,
    pub is_networked: bool,
    pub installation_date: Option<NaiveDate>,
    /// Wall A, Rack 2, Ceiling, ...
    pub location_in_lab: Option<String>,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_quantity() -> i32 {
    1
}

/// Create lab equipment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLabEquipment {
    pub lab_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub equipment_code: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub category: EquipmentCategory,
    #[serde(default)]
    pub equipment_type: EquipmentType,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub model_name: Option<String>,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[serde(default)]
    pub is_networked: bool,
    pub installation_date: Option<NaiveDate>,
    #[validate(length(max = 200))]
    pub location_in_lab: Option<String>,
    pub remarks: Option<String>,
}

/// Update lab equipment request; omitted fields keep their value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateLabEquipment {
    /// Move the equipment to another lab
    pub lab_id: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub equipment_code: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub equipment_type: Option<EquipmentType>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub model_name: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub status: Option<EquipmentStatus>,
    pub is_networked: Option<bool>,
    pub installation_date: Option<NaiveDate>,
    #[validate(length(max = 200))]
    pub location_in_lab: Option<String>,
    pub remarks: Option<String>,
}

/// Equipment listing filter
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct LabEquipmentQuery {
    pub lab_id: Option<i32>,
    pub equipment_type: Option<EquipmentType>,
    pub status: Option<EquipmentStatus>,
}

// ---------------------------------------------------------------------------
// Detail sub-records
// ---------------------------------------------------------------------------

/// For ROUTER, SWITCH, HUB, SERVER and E_BOARD
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NetworkDetails {
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub firmware_version: Option<String>,
    pub number_of_ports: Option<i32>,
    /// Size in rack units
    pub rack_unit_size: Option<i32>,
    #[serde(default)]
    pub managed_switch: bool,
    /// e.g. 1Gbps, 10Gbps
    pub bandwidth_capacity: Option<String>,
    pub power_rating: Option<String>,
}

/// For SERVER only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServerDetails {
    pub cpu_model: Option<String>,
    pub total_ram: Option<String>,
    pub total_storage: Option<String>,
    /// e.g. RAID 1, RAID 5
    pub raid_config: Option<String>,
    #[serde(default)]
    pub virtualization_enabled: bool,
    pub operating_system: Option<String>,
}

/// For PROJECTOR only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProjectorDetails {
    /// e.g. 1920x1080, 4K
    pub resolution: Option<String>,
    pub brightness_lumens: Option<i32>,
    /// e.g. Short throw, Long throw
    pub throw_type: Option<String>,
    pub hdmi_ports: Option<i32>,
}

/// For AC, FAN and LIGHT
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ElectricalDetails {
    /// e.g. 1500W, 2HP
    pub power_rating: Option<String>,
    /// e.g. 220V
    pub voltage: Option<String>,
    #[serde(default)]
    pub inverter_type: bool,
    /// e.g. 5 Star, A++
    pub energy_rating: Option<String>,
    pub service_due_date: Option<NaiveDate>,
}

/// The one detail sub-record a piece of equipment may own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquipmentDetail {
    Network(NetworkDetails),
    Server(ServerDetails),
    Projector(ProjectorDetails),
    Electrical(ElectricalDetails),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Network,
    Server,
    Projector,
    Electrical,
}

impl DetailKind {
    pub fn label(&self) -> &'static str {
        match self {
            DetailKind::Network => "network",
            DetailKind::Server => "server",
            DetailKind::Projector => "projector",
            DetailKind::Electrical => "electrical",
        }
    }

    /// Whether equipment of type `ty` may own a detail of this kind
    pub fn accepts(&self, ty: EquipmentType) -> bool {
        match self {
            DetailKind::Network => ty.is_networked_kind(),
            DetailKind::Server => ty == EquipmentType::Server,
            DetailKind::Projector => ty == EquipmentType::Projector,
            DetailKind::Electrical => ty.is_electrical(),
        }
    }

    pub fn accepted_types(&self) -> Vec<EquipmentType> {
        EquipmentType::ALL
            .iter()
            .copied()
            .filter(|ty| self.accepts(*ty))
            .collect()
    }
}

impl EquipmentDetail {
    pub fn kind(&self) -> DetailKind {
        match self {
            EquipmentDetail::Network(_) => DetailKind::Network,
            EquipmentDetail::Server(_) => DetailKind::Server,
            EquipmentDetail::Projector(_) => DetailKind::Projector,
            EquipmentDetail::Electrical(_) => DetailKind::Electrical,
        }
    }

    /// Storage-level guard: a detail only attaches to a matching equipment type.
    pub fn check_attachable(&self, ty: EquipmentType) -> Result<(), String> {
        let kind = self.kind();
        if kind.accepts(ty) {
            return Ok(());
        }
        let allowed: Vec<&str> = kind.accepted_types().iter().map(|t| t.as_str()).collect();
        Err(format!(
            "{} details can only be attached to {} equipment, not {}",
            kind.label(),
            allowed.join(", "),
            ty
        ))
    }
}

/// A type change must keep every detail the equipment already owns attachable.
pub fn check_retype(details: &[EquipmentDetail], ty: EquipmentType) -> Result<(), String> {
    details
        .iter()
        .try_for_each(|detail| detail.check_attachable(ty))
        .map_err(|msg| format!("cannot change type to {}: {}", ty, msg))
}
