//! Labs service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        lab::{CreateLab, Lab, UpdateLab},
        lab_equipment::{LabEquipment, LabEquipmentQuery},
        pc::Pc,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LabsService {
    repository: Repository,
}

impl LabsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Lab>> {
        self.repository.labs.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Lab> {
        self.repository.labs.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateLab) -> AppResult<Lab> {
        data.validate()?;
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Lab name is required".to_string()));
        }
        let lab = self.repository.labs.create(data).await?;
        tracing::info!("Created lab '{}' (id={})", lab.name, lab.id);
        Ok(lab)
    }

    pub async fn update(&self, id: i32, data: &UpdateLab) -> AppResult<Lab> {
        data.validate()?;
        if data.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::Validation("Lab name is required".to_string()));
        }
        self.repository.labs.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.labs.delete(id).await
    }

    /// PCs of an existing lab
    pub async fn pcs(&self, id: i32) -> AppResult<Vec<Pc>> {
        self.repository.labs.get_by_id(id).await?;
        self.repository.pcs.list(Some(id)).await
    }

    /// Equipment of an existing lab
    pub async fn equipment(&self, id: i32) -> AppResult<Vec<LabEquipment>> {
        self.repository.labs.get_by_id(id).await?;
        let query = LabEquipmentQuery {
            lab_id: Some(id),
            ..Default::default()
        };
        self.repository.lab_equipment.list(&query).await
    }
}
