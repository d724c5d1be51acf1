//! Per-PC operating system record

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::OsArchitecture;

/// Operating system installed on a PC; at most one per PC
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OperatingSystem {
    pub id: i32,
    pub pc_id: i32,
    pub name: String,
    pub version: Option<String>,
    pub install_date: Option<NaiveDate>,
    /// End of vendor support or licence
    pub expiration_date: Option<NaiveDate>,
    #[sqlx(try_from = "String")]
    pub architecture: OsArchitecture,
    pub product_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOperatingSystem {
    pub pc_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 50))]
    pub version: Option<String>,
    pub install_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub architecture: OsArchitecture,
    #[validate(length(max = 200))]
    pub product_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOperatingSystem {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 50))]
    pub version: Option<String>,
    pub install_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub architecture: Option<OsArchitecture>,
    #[validate(length(max = 200))]
    pub product_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_defaults_to_64_bit() {
        let os: CreateOperatingSystem = serde_json::from_value(serde_json::json!({
            "pc_id": 4,
            "name": "Windows 11 Pro"
        }))
        .unwrap();
        assert_eq!(os.architecture, OsArchitecture::Bits64);
        assert!(os.validate().is_ok());

        let blank = CreateOperatingSystem { name: String::new(), ..os };
        assert!(blank.validate().is_err());
    }
}
