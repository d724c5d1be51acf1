//! In-memory `InventoryStore` with real transaction semantics, for tests

use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use super::store::InventoryStore;
use crate::{
    error::{AppError, AppResult},
    models::{
        lab::{CreateLab, Lab},
        lab_equipment::{CreateLabEquipment, EquipmentDetail, LabEquipment},
        pc::{CreatePc, Pc},
    },
};

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub labs: Vec<Lab>,
    pub pcs: Vec<Pc>,
    pub equipment: Vec<LabEquipment>,
    pub details: Vec<(i32, EquipmentDetail)>,
    next_id: i32,
}

impl Inventory {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn lab_named(&self, name: &str) -> Option<&Lab> {
        self.labs.iter().find(|lab| lab.name == name)
    }

    pub fn details_of(&self, equipment_id: i32) -> Vec<&EquipmentDetail> {
        self.details
            .iter()
            .filter(|(id, _)| *id == equipment_id)
            .map(|(_, detail)| detail)
            .collect()
    }
}

/// Mirrors the VARCHAR widths of the SQL schema
fn check_width(value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::Validation(format!(
            "value too long for type character varying({})",
            max
        ))),
        _ => Ok(()),
    }
}

/// Committed state shared by every transaction
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    committed: Arc<Mutex<Inventory>>,
}

impl MemoryDatabase {
    pub fn begin(&self) -> MemoryStore {
        MemoryStore {
            database: self.clone(),
            working: self.snapshot(),
            savepoints: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Inventory {
        self.committed.lock().unwrap().clone()
    }
}

/// Open transaction; dropping it without [`commit`](Self::commit) discards it
pub struct MemoryStore {
    database: MemoryDatabase,
    working: Inventory,
    savepoints: Vec<Inventory>,
}

impl MemoryStore {
    pub fn commit(self) {
        *self.database.committed.lock().unwrap() = self.working;
    }

    fn lab(&self, id: i32) -> Option<&Lab> {
        self.working.labs.iter().find(|lab| lab.id == id)
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn find_lab(&mut self, id: i32) -> AppResult<Option<Lab>> {
        Ok(self.lab(id).cloned())
    }

    async fn lab_exists(&mut self, name: &str) -> AppResult<bool> {
        Ok(self.working.lab_named(name).is_some())
    }

    async fn get_or_create_lab(&mut self, name: &str) -> AppResult<(Lab, bool)> {
        if let Some(lab) = self.working.lab_named(name) {
            return Ok((lab.clone(), false));
        }
        let lab = self
            .create_lab(&CreateLab {
                name: name.to_string(),
                location: None,
            })
            .await?;
        Ok((lab, true))
    }

    async fn create_lab(&mut self, data: &CreateLab) -> AppResult<Lab> {
        if self.working.lab_named(&data.name).is_some() {
            return Err(AppError::Conflict(format!("Lab '{}' already exists", data.name)));
        }
        check_width(Some(&data.name), 100)?;
        check_width(data.location.as_deref(), 200)?;
        let now = Utc::now();
        let lab = Lab {
            id: self.working.next_id(),
            name: data.name.clone(),
            location: data.location.clone(),
            created_at: now,
            updated_at: now,
        };
        self.working.labs.push(lab.clone());
        Ok(lab)
    }

    async fn pc_exists(&mut self, lab_id: i32, device_name: &str) -> AppResult<bool> {
        Ok(self
            .working
            .pcs
            .iter()
            .any(|pc| pc.lab_id == lab_id && pc.device_name == device_name))
    }

    async fn create_pc(&mut self, data: &CreatePc) -> AppResult<Pc> {
        if self.lab(data.lab_id).is_none() {
            return Err(AppError::Validation(format!("Lab {} does not exist", data.lab_id)));
        }
        if self.pc_exists(data.lab_id, &data.device_name).await? {
            return Err(AppError::Conflict(format!("PC '{}' already exists", data.device_name)));
        }
        check_width(Some(&data.device_name), 100)?;
        check_width(data.product_id.as_deref(), 100)?;
        check_width(data.processor.as_deref(), 200)?;
        let now = Utc::now();
        let pc = Pc {
            id: self.working.next_id(),
            lab_id: data.lab_id,
            device_name: data.device_name.clone(),
            product_id: data.product_id.clone(),
            processor: data.processor.clone(),
            ram: data.ram.clone(),
            storage: data.storage.clone(),
            status: data.status,
            connected: data.connected,
            gpu: data.gpu,
            peripherals: data.peripherals,
            brand: data.brand.clone(),
            serial_number: data.serial_number.clone(),
            created_at: now,
            updated_at: now,
        };
        self.working.pcs.push(pc.clone());
        Ok(pc)
    }

    async fn equipment_exists(&mut self, lab_id: i32, equipment_code: &str) -> AppResult<bool> {
        Ok(self
            .working
            .equipment
            .iter()
            .any(|eq| eq.lab_id == lab_id && eq.equipment_code == equipment_code))
    }

    async fn create_equipment(&mut self, data: &CreateLabEquipment) -> AppResult<LabEquipment> {
        if self.lab(data.lab_id).is_none() {
            return Err(AppError::Validation(format!("Lab {} does not exist", data.lab_id)));
        }
        if self.equipment_exists(data.lab_id, &data.equipment_code).await? {
            return Err(AppError::Conflict(format!(
                "Equipment '{}' already exists",
                data.equipment_code
            )));
        }
        if data.quantity < 1 {
            return Err(AppError::Validation("quantity must be at least 1".to_string()));
        }
        let now = Utc::now();
        let equipment = LabEquipment {
            id: self.working.next_id(),
            lab_id: data.lab_id,
            equipment_code: data.equipment_code.clone(),
            name: data.name.clone(),
            category: data.category,
            equipment_type: data.equipment_type,
            brand: data.brand.clone(),
            model_name: data.model_name.clone(),
            quantity: data.quantity,
            status: data.status,
            is_networked: data.is_networked,
            installation_date: data.installation_date,
            location_in_lab: data.location_in_lab.clone(),
            remarks: data.remarks.clone(),
            created_at: now,
            updated_at: now,
        };
        self.working.equipment.push(equipment.clone());
        Ok(equipment)
    }

    async fn create_detail(
        &mut self,
        equipment: &LabEquipment,
        detail: &EquipmentDetail,
    ) -> AppResult<()> {
        detail
            .check_attachable(equipment.equipment_type)
            .map_err(AppError::BusinessRule)?;
        if self
            .working
            .details_of(equipment.id)
            .iter()
            .any(|existing| existing.kind() == detail.kind())
        {
            return Err(AppError::Conflict(format!(
                "Equipment {} already has {} details",
                equipment.id,
                detail.kind().label()
            )));
        }
        // Mirrors the INET column of the SQL schema
        if let EquipmentDetail::Network(network) = detail {
            if let Some(ip) = &network.ip_address {
                ip.parse::<IpAddr>().map_err(|_| {
                    AppError::Validation(format!("invalid input syntax for type inet: \"{}\"", ip))
                })?;
            }
        }
        self.working.details.push((equipment.id, detail.clone()));
        Ok(())
    }

    async fn savepoint(&mut self) -> AppResult<()> {
        self.savepoints.push(self.working.clone());
        Ok(())
    }

    async fn release_savepoint(&mut self) -> AppResult<()> {
        self.savepoints
            .pop()
            .map(|_| ())
            .ok_or_else(|| AppError::Internal("no savepoint to release".to_string()))
    }

    async fn rollback_to_savepoint(&mut self) -> AppResult<()> {
        let saved = self
            .savepoints
            .pop()
            .ok_or_else(|| AppError::Internal("no savepoint to roll back to".to_string()))?;
        self.working = saved;
        Ok(())
    }
}
