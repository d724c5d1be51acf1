//! Per-PC operating system service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::os::{CreateOperatingSystem, OperatingSystem, UpdateOperatingSystem},
    repository::Repository,
};

#[derive(Clone)]
pub struct OperatingSystemsService {
    repository: Repository,
}

impl OperatingSystemsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, pc_id: Option<i32>) -> AppResult<Vec<OperatingSystem>> {
        self.repository.operating_systems.list(pc_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<OperatingSystem> {
        self.repository.operating_systems.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateOperatingSystem) -> AppResult<OperatingSystem> {
        data.validate()?;
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Operating system name is required".to_string()));
        }
        self.repository.pcs.get_by_id(data.pc_id).await?;
        self.repository.operating_systems.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateOperatingSystem) -> AppResult<OperatingSystem> {
        data.validate()?;
        self.repository.operating_systems.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.operating_systems.delete(id).await
    }
}
