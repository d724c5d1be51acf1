//! Per-PC CPU service

use validator::Validate;

use crate::{
    error::AppResult,
    models::cpu::{CreateCpu, Cpu, UpdateCpu},
    repository::Repository,
};

#[derive(Clone)]
pub struct CpusService {
    repository: Repository,
}

impl CpusService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, pc_id: Option<i32>) -> AppResult<Vec<Cpu>> {
        self.repository.cpus.list(pc_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Cpu> {
        self.repository.cpus.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateCpu) -> AppResult<Cpu> {
        data.validate()?;
        self.repository.pcs.get_by_id(data.pc_id).await?;
        self.repository.cpus.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateCpu) -> AppResult<Cpu> {
        data.validate()?;
        self.repository.cpus.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.cpus.delete(id).await
    }
}
