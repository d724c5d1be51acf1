//! Peripheral model (devices attached to a PC)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{DeviceStatus, PeripheralType};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Peripheral {
    pub id: i32,
    pub pc_id: i32,
    #[sqlx(try_from = "String")]
    pub peripheral_type: PeripheralType,
    pub brand: Option<String>,
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: DeviceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePeripheral {
    pub pc_id: i32,
    pub peripheral_type: PeripheralType,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub model_name: Option<String>,
    #[validate(length(max = 100))]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub status: DeviceStatus,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePeripheral {
    /// Move the peripheral to another PC
    pub pc_id: Option<i32>,
    pub peripheral_type: Option<PeripheralType>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub model_name: Option<String>,
    #[validate(length(max = 100))]
    pub serial_number: Option<String>,
    pub status: Option<DeviceStatus>,
}

/// Peripheral listing filter
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PeripheralQuery {
    pub pc_id: Option<i32>,
    pub peripheral_type: Option<PeripheralType>,
    pub status: Option<DeviceStatus>,
}
