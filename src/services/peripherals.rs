//! Peripherals service

use validator::Validate;

use crate::{
    error::AppResult,
    models::peripheral::{CreatePeripheral, Peripheral, PeripheralQuery, UpdatePeripheral},
    repository::Repository,
};

#[derive(Clone)]
pub struct PeripheralsService {
    repository: Repository,
}

impl PeripheralsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &PeripheralQuery) -> AppResult<Vec<Peripheral>> {
        self.repository.peripherals.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Peripheral> {
        self.repository.peripherals.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreatePeripheral) -> AppResult<Peripheral> {
        data.validate()?;
        self.repository.pcs.get_by_id(data.pc_id).await?;
        self.repository.peripherals.create(data).await
    }

    /// Update a peripheral; a new PC must exist
    pub async fn update(&self, id: i32, data: &UpdatePeripheral) -> AppResult<Peripheral> {
        data.validate()?;
        if let Some(pc_id) = data.pc_id {
            self.repository.pcs.get_by_id(pc_id).await?;
        }
        self.repository.peripherals.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.peripherals.delete(id).await
    }
}
