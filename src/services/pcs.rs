//! PCs service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        pc::{CreatePc, Pc, UpdatePc},
        peripheral::{Peripheral, PeripheralQuery},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct PcsService {
    repository: Repository,
}

impl PcsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, lab_id: Option<i32>) -> AppResult<Vec<Pc>> {
        self.repository.pcs.list(lab_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Pc> {
        self.repository.pcs.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreatePc) -> AppResult<Pc> {
        data.validate()?;
        self.repository.labs.get_by_id(data.lab_id).await?;
        self.repository.pcs.create(data).await
    }

    /// Update a PC; a new lab must exist
    pub async fn update(&self, id: i32, data: &UpdatePc) -> AppResult<Pc> {
        data.validate()?;
        if let Some(lab_id) = data.lab_id {
            self.repository.labs.get_by_id(lab_id).await?;
        }
        self.repository.pcs.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.pcs.delete(id).await
    }

    pub async fn peripherals(&self, id: i32) -> AppResult<Vec<Peripheral>> {
        self.repository.pcs.get_by_id(id).await?;
        let query = PeripheralQuery {
            pc_id: Some(id),
            ..Default::default()
        };
        self.repository.peripherals.list(&query).await
    }
}
