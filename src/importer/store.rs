//! Record-store seam between the import pipeline and storage
//!
//! One store value is one open transaction. Importers only ever create or
//! skip records; nothing here mutates existing rows.

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        lab::{CreateLab, Lab},
        lab_equipment::{CreateLabEquipment, EquipmentDetail, LabEquipment},
        pc::{CreatePc, Pc},
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryStore: Send {
    async fn find_lab(&mut self, id: i32) -> AppResult<Option<Lab>>;

    async fn lab_exists(&mut self, name: &str) -> AppResult<bool>;

    /// Returns the lab and whether it was created by this call
    async fn get_or_create_lab(&mut self, name: &str) -> AppResult<(Lab, bool)>;

    async fn create_lab(&mut self, data: &CreateLab) -> AppResult<Lab>;

    async fn pc_exists(&mut self, lab_id: i32, device_name: &str) -> AppResult<bool>;

    async fn create_pc(&mut self, data: &CreatePc) -> AppResult<Pc>;

    async fn equipment_exists(&mut self, lab_id: i32, equipment_code: &str) -> AppResult<bool>;

    async fn create_equipment(&mut self, data: &CreateLabEquipment) -> AppResult<LabEquipment>;

    /// Must refuse a detail whose kind does not fit the equipment type,
    /// whatever filtering the caller already did.
    async fn create_detail(
        &mut self,
        equipment: &LabEquipment,
        detail: &EquipmentDetail,
    ) -> AppResult<()>;

    /// Open a nested row guard
    async fn savepoint(&mut self) -> AppResult<()>;

    /// Keep everything written since the last [`savepoint`](Self::savepoint)
    async fn release_savepoint(&mut self) -> AppResult<()>;

    /// Discard everything written since the last [`savepoint`](Self::savepoint)
    async fn rollback_to_savepoint(&mut self) -> AppResult<()>;
}
