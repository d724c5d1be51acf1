//! Installed software service

use validator::Validate;

use crate::{
    error::AppResult,
    models::software::{CreateSoftware, Software, SoftwareQuery, UpdateSoftware},
    repository::Repository,
};

#[derive(Clone)]
pub struct SoftwareService {
    repository: Repository,
}

impl SoftwareService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &SoftwareQuery) -> AppResult<Vec<Software>> {
        self.repository.software.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Software> {
        self.repository.software.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateSoftware) -> AppResult<Software> {
        data.validate()?;
        self.repository.pcs.get_by_id(data.pc_id).await?;
        self.repository.software.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateSoftware) -> AppResult<Software> {
        data.validate()?;
        self.repository.software.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.software.delete(id).await
    }
}
