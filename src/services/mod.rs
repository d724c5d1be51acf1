//! Business logic services

pub mod cpus;
pub mod imports;
pub mod lab_equipment;
pub mod labs;
pub mod maintenance;
pub mod operating_systems;
pub mod pcs;
pub mod peripherals;
pub mod software;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub labs: labs::LabsService,
    pub pcs: pcs::PcsService,
    pub peripherals: peripherals::PeripheralsService,
    pub software: software::SoftwareService,
    pub lab_equipment: lab_equipment::LabEquipmentService,
    pub maintenance: maintenance::MaintenanceService,
    pub cpus: cpus::CpusService,
    pub operating_systems: operating_systems::OperatingSystemsService,
    pub imports: imports::ImportService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            labs: labs::LabsService::new(repository.clone()),
            pcs: pcs::PcsService::new(repository.clone()),
            peripherals: peripherals::PeripheralsService::new(repository.clone()),
            software: software::SoftwareService::new(repository.clone()),
            lab_equipment: lab_equipment::LabEquipmentService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            cpus: cpus::CpusService::new(repository.clone()),
            operating_systems: operating_systems::OperatingSystemsService::new(repository.clone()),
            imports: imports::ImportService::new(repository.clone()),
            repository,
        }
    }

    /// Round-trip to the database, for the readiness check
    pub async fn ping_database(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.repository.pool).await?;
        Ok(())
    }
}
