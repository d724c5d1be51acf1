//! PC model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::DeviceStatus;

/// PC record. `(lab_id, device_name)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pc {
    pub id: i32,
    pub lab_id: i32,
    /// Institution label for the PC
    pub device_name: String,
    /// Manufacturer identifier
    pub product_id: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: DeviceStatus,
    /// Connected to the lab network
    pub connected: bool,
    /// Dedicated GPU present
    pub gpu: bool,
    /// Peripherals tracked
    pub peripherals: bool,
    pub brand: Option<String>,
    pub serial_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Create PC request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePc {
    pub lab_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub device_name: String,
    #[validate(length(max = 100))]
    pub product_id: Option<String>,
    #[validate(length(max = 200))]
    pub processor: Option<String>,
    #[validate(length(max = 50))]
    pub ram: Option<String>,
    #[validate(length(max = 100))]
    pub storage: Option<String>,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default = "default_true")]
    pub connected: bool,
    #[serde(default)]
    pub gpu: bool,
    #[serde(default)]
    pub peripherals: bool,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub serial_number: Option<String>,
}

/// Update PC request; omitted fields keep their value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePc {
    /// Move the PC to another lab
    pub lab_id: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub device_name: Option<String>,
    #[validate(length(max = 100))]
    pub product_id: Option<String>,
    #[validate(length(max = 200))]
    pub processor: Option<String>,
    #[validate(length(max = 50))]
    pub ram: Option<String>,
    #[validate(length(max = 100))]
    pub storage: Option<String>,
    pub status: Option<DeviceStatus>,
    pub connected: Option<bool>,
    pub gpu: Option<bool>,
    pub peripherals: Option<bool>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub serial_number: Option<String>,
}

/// Filter for records hanging off a PC
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PcPartQuery {
    pub pc_id: Option<i32>,
}
