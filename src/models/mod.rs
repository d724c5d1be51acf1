//! Data models for Labkeeper

pub mod cpu;
pub mod enums;
pub mod import_report;
pub mod inventory;
pub mod lab;
pub mod lab_equipment;
pub mod maintenance;
pub mod os;
pub mod pc;
pub mod peripheral;
pub mod software;

// Re-export commonly used types
pub use cpu::{CreateCpu, Cpu, UpdateCpu};
pub use enums::{
    DeviceStatus, EquipmentCategory, EquipmentStatus, EquipmentType, MaintenanceStatus,
    OsArchitecture, PeripheralType,
};
pub use import_report::{ImportEntity, ImportReport, ImportResponse};
pub use inventory::InventoryEntry;
pub use lab::{CreateLab, Lab, UpdateLab};
pub use lab_equipment::{CreateLabEquipment, EquipmentDetail, LabEquipment, UpdateLabEquipment};
pub use maintenance::{CreateMaintenanceLog, MaintenanceLog, UpdateMaintenanceLog};
pub use os::{CreateOperatingSystem, OperatingSystem, UpdateOperatingSystem};
pub use pc::{CreatePc, Pc, PcPartQuery, UpdatePc};
pub use peripheral::{CreatePeripheral, Peripheral, PeripheralQuery, UpdatePeripheral};
pub use software::{CreateSoftware, Software, UpdateSoftware};
