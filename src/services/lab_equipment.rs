//! Lab equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        inventory::InventoryEntry,
        lab_equipment::{
            check_retype, CreateLabEquipment, EquipmentDetail, LabEquipment, LabEquipmentQuery,
            UpdateLabEquipment,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LabEquipmentService {
    repository: Repository,
}

impl LabEquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &LabEquipmentQuery) -> AppResult<Vec<LabEquipment>> {
        self.repository.lab_equipment.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<LabEquipment> {
        self.repository.lab_equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateLabEquipment) -> AppResult<LabEquipment> {
        data.validate()?;
        self.repository.labs.get_by_id(data.lab_id).await?;
        self.repository.lab_equipment.create(data).await
    }

    /// Update equipment. A new lab must exist and a new type must still
    /// accept every detail record the equipment owns.
    pub async fn update(&self, id: i32, data: &UpdateLabEquipment) -> AppResult<LabEquipment> {
        data.validate()?;
        let current = self.repository.lab_equipment.get_by_id(id).await?;
        if let Some(lab_id) = data.lab_id {
            self.repository.labs.get_by_id(lab_id).await?;
        }
        if let Some(ty) = data.equipment_type.filter(|ty| *ty != current.equipment_type) {
            let details = self.repository.lab_equipment.details(id).await?;
            check_retype(&details, ty).map_err(AppError::BusinessRule)?;
        }
        self.repository.lab_equipment.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.lab_equipment.delete(id).await
    }

    pub async fn details(&self, id: i32) -> AppResult<Vec<EquipmentDetail>> {
        self.repository.lab_equipment.get_by_id(id).await?;
        self.repository.lab_equipment.details(id).await
    }

    /// Attach or replace a detail; the kind must fit the equipment type
    pub async fn put_detail(&self, id: i32, detail: &EquipmentDetail) -> AppResult<Vec<EquipmentDetail>> {
        let equipment = self.repository.lab_equipment.get_by_id(id).await?;
        detail
            .check_attachable(equipment.equipment_type)
            .map_err(AppError::BusinessRule)?;
        self.repository.lab_equipment.put_detail(&equipment, detail).await?;
        self.repository.lab_equipment.details(id).await
    }

    pub async fn inventory(&self, lab_id: Option<i32>) -> AppResult<Vec<InventoryEntry>> {
        self.repository.lab_equipment.inventory(lab_id).await
    }
}
