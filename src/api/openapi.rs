//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    cpus, health, imports, inventory, lab_equipment, labs, maintenance, operating_systems, pcs,
    peripherals, software,
};
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Labkeeper API",
        version = "0.3.0",
        description = "Computer lab inventory REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Import
        imports::import_file,
        // Labs
        labs::list_labs,
        labs::get_lab,
        labs::create_lab,
        labs::update_lab,
        labs::delete_lab,
        labs::list_lab_pcs,
        labs::list_lab_equipment,
        // PCs
        pcs::list_pcs,
        pcs::get_pc,
        pcs::create_pc,
        pcs::update_pc,
        pcs::delete_pc,
        pcs::list_pc_peripherals,
        // Peripherals
        peripherals::list_peripherals,
        peripherals::get_peripheral,
        peripherals::create_peripheral,
        peripherals::update_peripheral,
        peripherals::delete_peripheral,
        // Software
        software::list_software,
        software::get_software,
        software::create_software,
        software::update_software,
        software::delete_software,
        // CPU and operating system
        cpus::list_cpus,
        cpus::get_cpu,
        cpus::create_cpu,
        cpus::update_cpu,
        cpus::delete_cpu,
        operating_systems::list_operating_systems,
        operating_systems::get_operating_system,
        operating_systems::create_operating_system,
        operating_systems::update_operating_system,
        operating_systems::delete_operating_system,
        // Lab equipment
        lab_equipment::list_equipment,
        lab_equipment::get_equipment,
        lab_equipment::create_equipment,
        lab_equipment::update_equipment,
        lab_equipment::delete_equipment,
        lab_equipment::get_details,
        lab_equipment::put_detail,
        // Maintenance
        maintenance::list_logs,
        maintenance::get_log,
        maintenance::create_log,
        maintenance::update_log,
        maintenance::delete_log,
        maintenance::fix_log,
        // Inventory
        inventory::get_inventory,
    ),
    components(
        schemas(
            // Enums
            models::DeviceStatus,
            models::EquipmentCategory,
            models::EquipmentType,
            models::EquipmentStatus,
            models::PeripheralType,
            models::MaintenanceStatus,
            models::OsArchitecture,
            // Labs and PCs
            models::Lab,
            models::CreateLab,
            models::UpdateLab,
            models::Pc,
            models::CreatePc,
            models::UpdatePc,
            models::Peripheral,
            models::CreatePeripheral,
            models::UpdatePeripheral,
            models::Software,
            models::CreateSoftware,
            models::UpdateSoftware,
            // CPU and operating system
            models::Cpu,
            models::CreateCpu,
            models::UpdateCpu,
            models::OperatingSystem,
            models::CreateOperatingSystem,
            models::UpdateOperatingSystem,
            // Lab equipment
            models::LabEquipment,
            models::CreateLabEquipment,
            models::UpdateLabEquipment,
            models::EquipmentDetail,
            models::lab_equipment::NetworkDetails,
            models::lab_equipment::ServerDetails,
            models::lab_equipment::ProjectorDetails,
            models::lab_equipment::ElectricalDetails,
            models::InventoryEntry,
            // Maintenance
            models::MaintenanceLog,
            models::CreateMaintenanceLog,
            models::maintenance::FixMaintenanceLog,
            models::UpdateMaintenanceLog,
            // Import
            imports::ImportUpload,
            models::ImportEntity,
            models::ImportResponse,
            models::import_report::ImportedLab,
            models::import_report::ImportFailure,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "import", description = "Bulk spreadsheet import"),
        (name = "labs", description = "Lab management"),
        (name = "pcs", description = "PC management"),
        (name = "peripherals", description = "PC peripherals"),
        (name = "software", description = "Installed software"),
        (name = "cpu", description = "Per-PC CPU records"),
        (name = "os", description = "Per-PC operating system records"),
        (name = "lab-equipment", description = "Non-PC lab equipment and its details"),
        (name = "maintenance", description = "Maintenance logs"),
        (name = "inventory", description = "Inventory summary")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::PathItemType;

    #[test]
    fn test_document_lists_import_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/labs/import"));
        assert!(doc.paths.paths.contains_key("/lab-equipment/{id}/details"));
    }

    #[test]
    fn test_document_lists_crud_endpoints() {
        let doc = ApiDoc::openapi();
        for path in [
            "/peripherals",
            "/peripherals/{id}",
            "/software/{id}",
            "/maintenance/{id}",
            "/cpu",
            "/cpu/{id}",
            "/os",
            "/os/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
        let lab = &doc.paths.paths["/labs/{id}"].operations;
        assert!(lab.contains_key(&PathItemType::Put));
        assert!(lab.contains_key(&PathItemType::Delete));
        assert!(doc.paths.paths["/maintenance/{id}"]
            .operations
            .contains_key(&PathItemType::Delete));
    }
}
