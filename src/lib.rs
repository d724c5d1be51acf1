//! Labkeeper computer lab inventory
//!
//! REST JSON API for labs, PCs, peripherals, installed software, lab
//! equipment and maintenance logs, plus a bulk import pipeline that loads
//! CSV/XLSX/XLS spreadsheets into the inventory.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod importer;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
