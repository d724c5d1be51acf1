//! Per-PC CPU record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Processor fitted in a PC; at most one per PC
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cpu {
    pub id: i32,
    pub pc_id: i32,
    pub model: String,
    /// e.g. 3.6GHz
    pub clock_speed: Option<String>,
    pub core_count: Option<i32>,
    pub integrated_graphics: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCpu {
    pub pc_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub model: String,
    #[validate(length(max = 50))]
    pub clock_speed: Option<String>,
    #[validate(range(min = 1))]
    pub core_count: Option<i32>,
    #[serde(default)]
    pub integrated_graphics: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCpu {
    #[validate(length(min = 1, max = 200))]
    pub model: Option<String>,
    #[validate(length(max = 50))]
    pub clock_speed: Option<String>,
    #[validate(range(min = 1))]
    pub core_count: Option<i32>,
    pub integrated_graphics: Option<bool>,
}
