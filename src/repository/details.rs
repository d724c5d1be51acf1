//! SQL for equipment detail sub-records, usable on a pool or inside a transaction

use sqlx::{PgExecutor, Postgres, Transaction};

use crate::models::lab_equipment::{
    DetailKind, ElectricalDetails, EquipmentDetail, LabEquipment, NetworkDetails,
    ProjectorDetails, ServerDetails,
};

fn table(kind: DetailKind) -> &'static str {
    match kind {
        DetailKind::Network => "network_equipment_details",
        DetailKind::Server => "server_details",
        DetailKind::Projector => "projector_details",
        DetailKind::Electrical => "electrical_appliance_details",
    }
}

/// Insert one detail row. The owner's type is copied into the row so the
/// table's CHECK constraint can refuse a mismatched kind.
pub async fn insert<'e, E>(
    executor: E,
    equipment: &LabEquipment,
    detail: &EquipmentDetail,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let ty = equipment.equipment_type.as_str();
    match detail {
        EquipmentDetail::Network(d) => {
            sqlx::query(
                r#"
                INSERT INTO network_equipment_details (
                    equipment_id, equipment_type, ip_address, mac_address, firmware_version,
                    number_of_ports, rack_unit_size, managed_switch, bandwidth_capacity, power_rating
                ) VALUES ($1, $2, $3::inet, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(equipment.id)
            .bind(ty)
            .bind(&d.ip_address)
            .bind(&d.mac_address)
            .bind(&d.firmware_version)
            .bind(d.number_of_ports)
            .bind(d.rack_unit_size)
            .bind(d.managed_switch)
            .bind(&d.bandwidth_capacity)
            .bind(&d.power_rating)
            .execute(executor)
            .await?;
        }
        EquipmentDetail::Server(d) => {
            sqlx::query(
                r#"
                INSERT INTO server_details (
                    equipment_id, equipment_type, cpu_model, total_ram, total_storage,
                    raid_config, virtualization_enabled, operating_system
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(equipment.id)
            .bind(ty)
            .bind(&d.cpu_model)
            .bind(&d.total_ram)
            .bind(&d.total_storage)
            .bind(&d.raid_config)
            .bind(d.virtualization_enabled)
            .bind(&d.operating_system)
            .execute(executor)
            .await?;
        }
        EquipmentDetail::Projector(d) => {
            sqlx::query(
                r#"
                INSERT INTO projector_details (
                    equipment_id, equipment_type, resolution, brightness_lumens, throw_type, hdmi_ports
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(equipment.id)
            .bind(ty)
            .bind(&d.resolution)
            .bind(d.brightness_lumens)
            .bind(&d.throw_type)
            .bind(d.hdmi_ports)
            .execute(executor)
            .await?;
        }
        EquipmentDetail::Electrical(d) => {
            sqlx::query(
                r#"
                INSERT INTO electrical_appliance_details (
                    equipment_id, equipment_type, power_rating, voltage, inverter_type,
                    energy_rating, service_due_date
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(equipment.id)
            .bind(ty)
            .bind(&d.power_rating)
            .bind(&d.voltage)
            .bind(d.inverter_type)
            .bind(&d.energy_rating)
            .bind(d.service_due_date)
            .execute(executor)
            .await?;
        }
    }
    Ok(())
}

/// Insert or overwrite the detail of `detail`'s kind
pub async fn replace(
    tx: &mut Transaction<'static, Postgres>,
    equipment: &LabEquipment,
    detail: &EquipmentDetail,
) -> Result<(), sqlx::Error> {
    let query = format!("DELETE FROM {} WHERE equipment_id = $1", table(detail.kind()));
    sqlx::query(&query)
        .bind(equipment.id)
        .execute(&mut **tx)
        .await?;
    insert(&mut **tx, equipment, detail).await
}

/// Every detail attached to `equipment_id`, network first
pub async fn fetch_all<'e, E>(executor: E, equipment_id: i32) -> Result<Vec<EquipmentDetail>, sqlx::Error>
where
    E: PgExecutor<'e> + Copy,
{
    let mut details = Vec::new();

    let network = sqlx::query_as::<_, NetworkDetails>(
        r#"
        SELECT host(ip_address) AS ip_address, mac_address, firmware_version, number_of_ports,
               rack_unit_size, managed_switch, bandwidth_capacity, power_rating
        FROM network_equipment_details WHERE equipment_id = $1
        "#,
    )
    .bind(equipment_id)
    .fetch_optional(executor)
    .await?;
    details.extend(network.map(EquipmentDetail::Network));

    let server = sqlx::query_as::<_, ServerDetails>(
        r#"
        SELECT cpu_model, total_ram, total_storage, raid_config, virtualization_enabled,
               operating_system
        FROM server_details WHERE equipment_id = $1
        "#,
    )
    .bind(equipment_id)
    .fetch_optional(executor)
    .await?;
    details.extend(server.map(EquipmentDetail::Server));

    let projector = sqlx::query_as::<_, ProjectorDetails>(
        r#"
        SELECT resolution, brightness_lumens, throw_type, hdmi_ports
        FROM projector_details WHERE equipment_id = $1
        "#,
    )
    .bind(equipment_id)
    .fetch_optional(executor)
    .await?;
    details.extend(projector.map(EquipmentDetail::Projector));

    let electrical = sqlx::query_as::<_, ElectricalDetails>(
        r#"
        SELECT power_rating, voltage, inverter_type, energy_rating, service_due_date
        FROM electrical_appliance_details WHERE equipment_id = $1
        "#,
    )
    .bind(equipment_id)
    .fetch_optional(executor)
    .await?;
    details.extend(electrical.map(EquipmentDetail::Electrical));

    Ok(details)
}
