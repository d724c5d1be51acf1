//! Repository layer for database operations

pub mod cpus;
pub mod details;
pub mod inventory_store;
pub mod lab_equipment;
pub mod labs;
pub mod maintenance;
pub mod operating_systems;
pub mod pcs;
pub mod peripherals;
pub mod software;

use sqlx::{Pool, Postgres};

pub use inventory_store::PgInventoryStore;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub labs: labs::LabsRepository,
    pub pcs: pcs::PcsRepository,
    pub peripherals: peripherals::PeripheralsRepository,
    pub software: software::SoftwareRepository,
    pub lab_equipment: lab_equipment::LabEquipmentRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub cpus: cpus::CpusRepository,
    pub operating_systems: operating_systems::OperatingSystemsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            labs: labs::LabsRepository::new(pool.clone()),
            pcs: pcs::PcsRepository::new(pool.clone()),
            peripherals: peripherals::PeripheralsRepository::new(pool.clone()),
            software: software::SoftwareRepository::new(pool.clone()),
            lab_equipment: lab_equipment::LabEquipmentRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            cpus: cpus::CpusRepository::new(pool.clone()),
            operating_systems: operating_systems::OperatingSystemsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open the transaction an import batch runs in
    pub async fn begin_import(&self) -> crate::error::AppResult<PgInventoryStore> {
        PgInventoryStore::begin(&self.pool).await
    }
}
