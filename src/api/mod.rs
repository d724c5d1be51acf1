//! API handlers for the Labkeeper REST endpoints

pub mod cpus;
pub mod health;
pub mod imports;
pub mod inventory;
pub mod lab_equipment;
pub mod labs;
pub mod maintenance;
pub mod openapi;
pub mod operating_systems;
pub mod pcs;
pub mod peripherals;
pub mod software;
