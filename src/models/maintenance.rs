//! Maintenance log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::enums::MaintenanceStatus;
use crate::error::{AppError, AppResult};

/// Maintenance ticket raised against exactly one PC, lab equipment or peripheral
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceLog {
    pub id: i32,
    pub pc_id: Option<i32>,
    pub lab_equipment_id: Option<i32>,
    pub peripheral_id: Option<i32>,
    /// Derived from the target on creation
    pub lab_id: Option<i32>,
    pub reported_by: Option<String>,
    pub fixed_by: Option<String>,
    pub issue_description: Option<String>,
    pub status_before: Option<String>,
    pub status_after: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: MaintenanceStatus,
    pub reported_on: DateTime<Utc>,
    pub fixed_on: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

/// Create maintenance log request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMaintenanceLog {
    pub pc_id: Option<i32>,
    pub lab_equipment_id: Option<i32>,
    pub peripheral_id: Option<i32>,
    pub reported_by: Option<String>,
    pub issue_description: Option<String>,
    pub status_before: Option<String>,
}

/// Close a maintenance ticket
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FixMaintenanceLog {
    pub fixed_by: Option<String>,
    pub status_after: Option<String>,
    pub remarks: Option<String>,
}

/// Edit a maintenance ticket; omitted fields keep their value.
/// Moving `status` to FIXED stamps `fixed_on` if it is unset.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateMaintenanceLog {
    pub reported_by: Option<String>,
    pub fixed_by: Option<String>,
    pub issue_description: Option<String>,
    pub status_before: Option<String>,
    pub status_after: Option<String>,
    pub status: Option<MaintenanceStatus>,
    pub remarks: Option<String>,
}

/// Listing filter
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct MaintenanceQuery {
    pub lab_id: Option<i32>,
    pub status: Option<MaintenanceStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceTarget {
    Pc(i32),
    LabEquipment(i32),
    Peripheral(i32),
}

impl CreateMaintenanceLog {
    /// Exactly one of pc, lab equipment or peripheral must be set.
    pub fn target(&self) -> AppResult<MaintenanceTarget> {
        match (self.pc_id, self.lab_equipment_id, self.peripheral_id) {
            (Some(id), None, None) => Ok(MaintenanceTarget::Pc(id)),
            (None, Some(id), None) => Ok(MaintenanceTarget::LabEquipment(id)),
            (None, None, Some(id)) => Ok(MaintenanceTarget::Peripheral(id)),
            _ => Err(AppError::Validation(
                "Exactly one of pc_id, lab_equipment_id, or peripheral_id must be set".to_string(),
            )),
        }
    }
}
