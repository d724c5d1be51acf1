//! Per-lab equipment inventory summary

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::EquipmentType;

/// Quantities of one equipment type in one lab, split by status
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryEntry {
    /// `<lab_id>_<EQUIPMENT_TYPE>`
    pub id: String,
    pub lab_id: i32,
    pub lab_name: String,
    #[sqlx(try_from = "String")]
    pub equipment_type: EquipmentType,
    pub total_quantity: i64,
    pub working_quantity: i64,
    pub not_working_quantity: i64,
    pub under_repair_quantity: i64,
}
