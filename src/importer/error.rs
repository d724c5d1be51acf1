//! Import pipeline error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::AppError, models::import_report::ImportFailure};

/// The uploaded file could not be turned into rows
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Only CSV, XLSX and XLS files are supported (got '{0}')")]
    UnsupportedFormat(String),

    #[error("CSV parse failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet parse failed: {0}")]
    Spreadsheet(String),

    #[error("Workbook has no worksheet")]
    NoWorksheet,

    #[error("File has no header row")]
    MissingHeader,
}

/// Recoverable problem with a single row; recorded and processing continues
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("{label} is required")]
    MissingField { label: &'static str },

    #[error("Invalid equipment_type '{0}', defaulted to OTHER")]
    InvalidEquipmentType(String),

    #[error("Failed to create {kind} details: {message}")]
    Detail { kind: &'static str, message: String },

    #[error("{0}")]
    Store(String),
}

/// Failure of a whole import call; the batch transaction is rolled back
#[derive(Error, Debug)]
pub enum ImportError {
    /// The upload form itself was unusable
    #[error("{0}")]
    Request(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Lab {0} not found")]
    LabNotFound(i32),

    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<sqlx::Error> for ImportError {
    fn from(err: sqlx::Error) -> Self {
        ImportError::Store(err.into())
    }
}

impl ImportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ImportError::Request(_) | ImportError::Load(_) => StatusCode::BAD_REQUEST,
            ImportError::LabNotFound(_) => StatusCode::NOT_FOUND,
            // a uniqueness race surfaces as 409
            ImportError::Store(err) => err.status_code(),
        }
    }

    /// Message safe to hand back to a client
    pub fn detail(&self) -> String {
        match self {
            ImportError::Store(err) => err.public_message(),
            other => other.to_string(),
        }
    }
}

/// Batch failures answer with a bare `{"detail": ...}` body
impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        let body = Json(ImportFailure {
            detail: self.detail(),
        });
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_failure_statuses() {
        let load = ImportError::from(LoadError::UnsupportedFormat("x.json".to_string()));
        assert_eq!(load.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ImportError::LabNotFound(3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ImportError::LabNotFound(3).detail(), "Lab 3 not found");

        let race = ImportError::from(AppError::Conflict("duplicate key".to_string()));
        assert_eq!(race.status_code(), StatusCode::CONFLICT);

        let internal = ImportError::from(AppError::Internal("pool closed".to_string()));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.detail(), "Internal server error");
    }

    #[test]
    fn test_row_error_messages() {
        assert_eq!(
            RowError::MissingField { label: "Lab name" }.to_string(),
            "Lab name is required"
        );
        assert_eq!(
            RowError::InvalidEquipmentType("laptop".to_string()).to_string(),
            "Invalid equipment_type 'laptop', defaulted to OTHER"
        );
    }
}
