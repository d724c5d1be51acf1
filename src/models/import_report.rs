//! Bulk-import result models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lab::Lab;

/// Which record kind an uploaded file describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ImportEntity {
    #[serde(rename = "labs")]
    Labs,
    #[serde(rename = "pcs")]
    Pcs,
    #[serde(rename = "lab-equipment")]
    LabEquipment,
}

impl ImportEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportEntity::Labs => "labs",
            ImportEntity::Pcs => "pcs",
            ImportEntity::LabEquipment => "lab-equipment",
        }
    }

    /// Parse the `entity` form field
    pub fn from_form(value: &str) -> Option<Self> {
        match value.trim() {
            "labs" => Some(ImportEntity::Labs),
            "pcs" => Some(ImportEntity::Pcs),
            "lab-equipment" => Some(ImportEntity::LabEquipment),
            _ => None,
        }
    }
}

/// Lab an import batch was attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportedLab {
    pub id: i32,
    pub name: String,
}

/// Outcome of one import call.
///
/// Row-level problems land in `errors` as `"Row <n>: <message>"`; batch-level
/// failures never produce a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    pub created: u32,
    pub skipped: u32,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab: Option<ImportedLab>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_lab(lab: &Lab) -> Self {
        Self {
            lab: Some(ImportedLab {
                id: lab.id,
                name: lab.name.clone(),
            }),
            ..Self::default()
        }
    }

    pub fn row_error(&mut self, row_number: usize, message: impl std::fmt::Display) {
        let entry = format!("Row {}: {}", row_number, message);
        tracing::debug!("Import {}", entry);
        self.errors.push(entry);
    }
}

/// Body returned by a successful import call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportResponse {
    pub status: String,
    pub entity: ImportEntity,
    pub created: u32,
    pub skipped: u32,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab: Option<ImportedLab>,
}

impl ImportResponse {
    pub fn success(entity: ImportEntity, report: ImportReport) -> Self {
        Self {
            status: "success".to_string(),
            entity,
            created: report.created,
            skipped: report.skipped,
            errors: report.errors,
            lab: report.lab,
        }
    }
}

/// Body returned when an import call fails as a whole
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportFailure {
    pub detail: String,
}
