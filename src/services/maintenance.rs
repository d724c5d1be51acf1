//! Maintenance log service

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        CreateMaintenanceLog, FixMaintenanceLog, MaintenanceLog, MaintenanceQuery,
        MaintenanceTarget, UpdateMaintenanceLog,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &MaintenanceQuery) -> AppResult<Vec<MaintenanceLog>> {
        self.repository.maintenance.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceLog> {
        self.repository.maintenance.get_by_id(id).await
    }

    /// Open a ticket against exactly one target, filed under the target's lab
    pub async fn create(&self, data: &CreateMaintenanceLog) -> AppResult<MaintenanceLog> {
        let lab_id = match data.target()? {
            MaintenanceTarget::Pc(id) => self.repository.pcs.get_by_id(id).await?.lab_id,
            MaintenanceTarget::LabEquipment(id) => {
                self.repository.lab_equipment.get_by_id(id).await?.lab_id
            }
            MaintenanceTarget::Peripheral(id) => {
                let peripheral = self.repository.peripherals.get_by_id(id).await?;
                self.repository.pcs.get_by_id(peripheral.pc_id).await?.lab_id
            }
        };
        let log = self.repository.maintenance.create(data, lab_id).await?;
        tracing::info!("Opened maintenance log {} in lab {}", log.id, lab_id);
        Ok(log)
    }

    pub async fn fix(&self, id: i32, data: &FixMaintenanceLog) -> AppResult<MaintenanceLog> {
        match self.repository.maintenance.fix(id, data).await? {
            Some(log) => Ok(log),
            None => {
                // Either missing or no longer pending
                self.repository.maintenance.get_by_id(id).await?;
                Err(AppError::BusinessRule(format!(
                    "Maintenance log {} is already fixed",
                    id
                )))
            }
        }
    }

    /// Edit a ticket; the target and lab are fixed at creation
    pub async fn update(&self, id: i32, data: &UpdateMaintenanceLog) -> AppResult<MaintenanceLog> {
        self.repository.maintenance.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.maintenance.delete(id).await
    }
}
