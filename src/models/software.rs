//! Installed software model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Software installed on a PC. `(pc_id, name, version)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Software {
    pub id: i32,
    pub pc_id: i32,
    pub name: String,
    pub version: Option<String>,
    pub license_key: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSoftware {
    pub pc_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 50))]
    pub version: Option<String>,
    pub license_key: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSoftware {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 50))]
    pub version: Option<String>,
    pub license_key: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

/// Software listing filter
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SoftwareQuery {
    pub pc_id: Option<i32>,
    /// Only licences expiring on or before this date
    pub expiring_before: Option<NaiveDate>,
}
