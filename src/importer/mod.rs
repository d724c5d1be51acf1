//! Bulk import pipeline
//!
//! A file is loaded into rows once, then handed to one of the entity
//! importers. Every importer runs against a single [`InventoryStore`]
//! value, i.e. a single transaction: the caller commits on success and
//! drops the store on a batch-level failure.

pub mod columns;
pub mod details;
pub mod error;
pub mod lab_equipment;
pub mod lab_resolver;
pub mod labs;
pub mod loader;
pub mod pcs;
pub mod store;

#[cfg(test)]
pub mod memory;

use chrono::NaiveDate;

pub use error::{ImportError, LoadError, RowError};
pub use lab_equipment::import_lab_equipment;
pub use lab_resolver::{resolve_lab, LabSelector};
pub use labs::import_labs;
pub use loader::{load_rows, CellValue, Row};
pub use pcs::import_pcs;
pub use store::InventoryStore;

/// Per-call inputs shared by every row of a batch
#[derive(Debug, Clone)]
pub struct BatchContext {
    pub file_name: Option<String>,
    pub selector: LabSelector,
    pub today: NaiveDate,
}

impl BatchContext {
    pub fn new(file_name: Option<String>, selector: LabSelector, today: NaiveDate) -> Self {
        Self {
            file_name,
            selector,
            today,
        }
    }
}

/// What happened to a row that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Created,
    Skipped,
}
