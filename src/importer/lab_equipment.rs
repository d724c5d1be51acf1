//! Lab equipment importer

use super::{
    columns::{parse_bool, parse_date, parse_int, resolve, resolve_text},
    details::details_for,
    error::{ImportError, RowError},
    lab_resolver::resolve_lab,
    loader::Row,
    store::InventoryStore,
    BatchContext,
};
use crate::{
    error::AppError,
    models::{
        enums::{EquipmentCategory, EquipmentStatus, EquipmentType},
        import_report::ImportReport,
        lab::Lab,
        lab_equipment::{CreateLabEquipment, EquipmentDetail, LabEquipment},
    },
};

const CODE: &[&str] = &["equipment_code", "code", "eq_code"];
const NAME: &[&str] = &["name", "equipment_name", "eq_name"];
const CATEGORY: &[&str] = &["category", "cat"];
const TYPE: &[&str] = &["equipment_type", "type", "eq_type"];
const STATUS: &[&str] = &["status"];
const QUANTITY: &[&str] = &["quantity", "qty"];
const NETWORKED: &[&str] = &["is_networked", "networked"];
const BRAND: &[&str] = &["brand"];
const MODEL: &[&str] = &["model_name", "model"];
const INSTALLED: &[&str] = &["installation_date", "install_date"];
const LOCATION: &[&str] = &["location_in_lab", "location"];
const REMARKS: &[&str] = &["remarks", "notes"];

/// A row mapped to the record it describes, plus what it reported on the way
#[derive(Debug, Clone)]
pub struct EquipmentDraft {
    pub equipment: CreateLabEquipment,
    /// Row errors that do not stop the record from being created
    pub warnings: Vec<RowError>,
    pub details: Vec<EquipmentDetail>,
}

/// `EQ-<lab id>-<index>` for rows that carry no code of their own
pub fn synthesized_code(lab_id: i32, index: usize) -> String {
    format!("EQ-{}-{:04}", lab_id, index)
}

pub fn equipment_category(raw: Option<String>) -> EquipmentCategory {
    raw.and_then(|s| EquipmentCategory::from_text(&s.trim().to_uppercase()))
        .unwrap_or_default()
}

pub fn equipment_status(raw: Option<String>) -> EquipmentStatus {
    raw.and_then(|s| EquipmentStatus::from_text(&s.trim().to_lowercase()))
        .unwrap_or_default()
}

/// Missing type is OTHER without comment; an unknown one is OTHER plus a
/// warning quoting what the file said.
pub fn equipment_type(raw: Option<String>) -> (EquipmentType, Option<RowError>) {
    match raw {
        None => (EquipmentType::Other, None),
        Some(raw) => match EquipmentType::from_text(&raw.trim().to_uppercase()) {
            Some(ty) => (ty, None),
            None => (EquipmentType::Other, Some(RowError::InvalidEquipmentType(raw))),
        },
    }
}

/// Never below 1, whatever the cell holds
pub fn quantity(row: &Row) -> i32 {
    parse_int(resolve(row, QUANTITY), 1).clamp(1, i64::from(i32::MAX)) as i32
}

/// Pure row mapping. Every field has a fallback, so a row always yields a
/// record; problems worth reporting come back as warnings.
pub fn equipment_from_row(row: &Row, lab: &Lab) -> EquipmentDraft {
    let equipment_code =
        resolve_text(row, CODE).unwrap_or_else(|| synthesized_code(lab.id, row.index()));
    let name = resolve_text(row, NAME).unwrap_or_else(|| equipment_code.clone());
    let (equipment_type, type_warning) = equipment_type(resolve_text(row, TYPE));

    let equipment = CreateLabEquipment {
        lab_id: lab.id,
        equipment_code,
        name,
        category: equipment_category(resolve_text(row, CATEGORY)),
        equipment_type,
        brand: resolve_text(row, BRAND),
        model_name: resolve_text(row, MODEL),
        quantity: quantity(row),
        status: equipment_status(resolve_text(row, STATUS)),
        is_networked: parse_bool(resolve(row, NETWORKED)),
        installation_date: parse_date(resolve(row, INSTALLED)),
        location_in_lab: resolve_text(row, LOCATION),
        remarks: resolve_text(row, REMARKS),
    };

    EquipmentDraft {
        details: details_for(equipment_type, row),
        warnings: type_warning.into_iter().collect(),
        equipment,
    }
}

/// `Ok(None)` when the code is already taken in this lab
async fn create_row<S: InventoryStore>(
    store: &mut S,
    data: &CreateLabEquipment,
) -> Result<Option<LabEquipment>, AppError> {
    if store.equipment_exists(data.lab_id, &data.equipment_code).await? {
        return Ok(None);
    }
    store.create_equipment(data).await.map(Some)
}

/// Each detail gets its own savepoint; a failed detail is reported and the
/// equipment row stays.
async fn attach_details<S: InventoryStore>(
    store: &mut S,
    report: &mut ImportReport,
    row: &Row,
    equipment: &LabEquipment,
    details: &[EquipmentDetail],
) -> Result<(), ImportError> {
    for detail in details {
        store.savepoint().await?;
        match store.create_detail(equipment, detail).await {
            Ok(()) => store.release_savepoint().await?,
            Err(err) => {
                store.rollback_to_savepoint().await?;
                report.row_error(
                    row.number(),
                    RowError::Detail {
                        kind: detail.kind().label(),
                        message: err.to_string(),
                    },
                );
            }
        }
    }
    Ok(())
}

/// Create every equipment row in `rows` under the one lab resolved for the
/// batch, with whatever detail sub-records the row's type calls for.
///
/// Store failures on a row are recorded against that row and its writes are
/// undone. A uniqueness conflict means another import raced this one and
/// fails the batch.
pub async fn import_lab_equipment<S: InventoryStore>(
    store: &mut S,
    rows: &[Row],
    ctx: &BatchContext,
) -> Result<ImportReport, ImportError> {
    let lab = resolve_lab(store, ctx.file_name.as_deref(), &ctx.selector, ctx.today).await?;
    let mut report = ImportReport::for_lab(&lab);

    for row in rows {
        let draft = equipment_from_row(row, &lab);
        for warning in &draft.warnings {
            report.row_error(row.number(), warning);
        }

        store.savepoint().await?;
        match create_row(store, &draft.equipment).await {
            Ok(Some(equipment)) => {
                store.release_savepoint().await?;
                report.created += 1;
                tracing::debug!(
                    "Imported equipment '{}' ({}) id={}",
                    equipment.equipment_code,
                    equipment.equipment_type,
                    equipment.id
                );
                attach_details(store, &mut report, row, &equipment, &draft.details).await?;
            }
            Ok(None) => {
                store.release_savepoint().await?;
                report.skipped += 1;
            }
            Err(AppError::Conflict(message)) => {
                return Err(AppError::Conflict(message).into());
            }
            Err(err) => {
                store.rollback_to_savepoint().await?;
                report.row_error(row.number(), RowError::Store(err.to_string()));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::{
        lab_resolver::LabSelector, loader::load_rows, memory::MemoryDatabase,
        store::MockInventoryStore,
    };
    use crate::models::lab_equipment::ServerDetails;
    use chrono::{NaiveDate, Utc};

    fn ctx() -> BatchContext {
        BatchContext::new(
            Some("equipment.csv".to_string()),
            LabSelector {
                lab_id: None,
                lab_name: Some("Networks Lab".to_string()),
            },
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    fn rows(csv: &str) -> Vec<Row> {
        load_rows("equipment.csv", csv.as_bytes()).unwrap()
    }

    fn lab(id: i32) -> Lab {
        Lab {
            id,
            name: "Networks Lab".to_string(),
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_quantity_coercion() {
        let rows = rows("code,quantity\nA,0\nB,-3\nC,abc\nD,\nE,5\nF,3.7\n");
        let quantities: Vec<i32> = rows.iter().map(quantity).collect();
        assert_eq!(quantities, vec![1, 1, 1, 1, 5, 3]);
        // no quantity column at all
        assert_eq!(quantity(&load_rows("eq.csv", b"code\nG\n").unwrap()[0]), 1);
    }

    #[test]
    fn test_code_and_name_fallbacks() {
        let rows = rows("code,name,type\n,,SWITCH\nSW-9,,SWITCH\n");
        let first = equipment_from_row(&rows[0], &lab(7));
        assert_eq!(first.equipment.equipment_code, "EQ-7-0000");
        assert_eq!(first.equipment.name, "EQ-7-0000");
        let second = equipment_from_row(&rows[1], &lab(7));
        assert_eq!(second.equipment.name, "SW-9");
    }

    #[test]
    fn test_silent_defaults_versus_reported_type() {
        let rows = rows("code,category,status,type\nX-1,furniture,exploded,laptop\n");
        let draft = equipment_from_row(&rows[0], &lab(1));
        assert_eq!(draft.equipment.category, EquipmentCategory::Infrastructure);
        assert_eq!(draft.equipment.status, EquipmentStatus::Working);
        assert_eq!(draft.equipment.equipment_type, EquipmentType::Other);
        assert_eq!(
            draft.warnings,
            vec![RowError::InvalidEquipmentType("laptop".to_string())]
        );
    }

    #[test]
    fn test_enum_text_is_normalized() {
        let rows = rows("code,category,status,type\nX-2, appliance ,UNDER_REPAIR,e_board\n");
        let draft = equipment_from_row(&rows[0], &lab(1));
        assert_eq!(draft.equipment.category, EquipmentCategory::Appliance);
        assert_eq!(draft.equipment.status, EquipmentStatus::UnderRepair);
        assert_eq!(draft.equipment.equipment_type, EquipmentType::EBoard);
        assert!(draft.warnings.is_empty());
    }

    #[test]
    fn test_missing_type_is_silently_other() {
        let draft = equipment_from_row(&rows("code\nX-3\n")[0], &lab(1));
        assert_eq!(draft.equipment.equipment_type, EquipmentType::Other);
        assert!(draft.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_type_is_reported_and_created() {
        let db = MemoryDatabase::default();
        let mut store = db.begin();

        let rows = rows("equipment_code,name,equipment_type\nLT-1,Staff laptop,laptop\n");
        let report = import_lab_equipment(&mut store, &rows, &ctx()).await.unwrap();
        store.commit();

        assert_eq!(report.created, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 2: "));
        assert!(report.errors[0].contains("laptop"));
        assert_eq!(db.snapshot().equipment[0].equipment_type, EquipmentType::Other);
    }

    #[tokio::test]
    async fn test_server_details_dispatch() {
        let db = MemoryDatabase::default();
        let mut store = db.begin();

        let rows = rows("code,type,cpu_model\nSRV-1,SERVER,Xeon Silver\nSRV-2,SERVER,\n");
        let report = import_lab_equipment(&mut store, &rows, &ctx()).await.unwrap();
        store.commit();
        assert_eq!(report.created, 2);
        assert!(report.errors.is_empty());

        let snapshot = db.snapshot();
        let with_cpu = &snapshot.equipment[0];
        assert_eq!(
            snapshot.details_of(with_cpu.id),
            vec![&EquipmentDetail::Server(ServerDetails {
                cpu_model: Some("Xeon Silver".to_string()),
                total_ram: None,
                total_storage: None,
                ..Default::default()
            })]
        );
        assert!(snapshot.details_of(snapshot.equipment[1].id).is_empty());
    }

    #[tokio::test]
    async fn test_failed_detail_keeps_equipment() {
        let db = MemoryDatabase::default();
        let mut store = db.begin();

        let rows = rows("code,type,ip,cpu\nSRV-1,SERVER,not-an-ip,EPYC\n");
        let report = import_lab_equipment(&mut store, &rows, &ctx()).await.unwrap();
        store.commit();

        assert_eq!(report.created, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Row 2: Failed to create network details:"));

        let snapshot = db.snapshot();
        assert_eq!(snapshot.equipment.len(), 1);
        let details = snapshot.details_of(snapshot.equipment[0].id);
        assert_eq!(details.len(), 1);
        assert!(matches!(details[0], EquipmentDetail::Server(_)));
    }

    #[tokio::test]
    async fn test_reimport_is_idempotent() {
        let db = MemoryDatabase::default();
        let rows = rows("code,type,ip\nSW-1,SWITCH,10.0.0.2\nSW-2,SWITCH,10.0.0.3\nFAN-1,FAN,\n");

        let mut first = db.begin();
        let report = import_lab_equipment(&mut first, &rows, &ctx()).await.unwrap();
        first.commit();
        assert_eq!((report.created, report.skipped), (3, 0));

        let mut second = db.begin();
        let report = import_lab_equipment(&mut second, &rows, &ctx()).await.unwrap();
        second.commit();
        assert_eq!((report.created, report.skipped), (0, 3));

        let snapshot = db.snapshot();
        assert_eq!(snapshot.equipment.len(), 3);
        assert_eq!(snapshot.details.len(), 2);
    }

    #[tokio::test]
    async fn test_synthesized_codes_are_stable_across_imports() {
        let db = MemoryDatabase::default();
        let rows = rows("name,type\nCeiling fan,FAN\nTube light,LIGHT\n");

        for expected_created in [2, 0] {
            let mut store = db.begin();
            let report = import_lab_equipment(&mut store, &rows, &ctx()).await.unwrap();
            store.commit();
            assert_eq!(report.created, expected_created);
        }

        let snapshot = db.snapshot();
        let lab_id = snapshot.lab_named("Networks Lab").unwrap().id;
        let codes: Vec<_> = snapshot.equipment.iter().map(|e| e.equipment_code.clone()).collect();
        assert_eq!(
            codes,
            vec![synthesized_code(lab_id, 0), synthesized_code(lab_id, 1)]
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_a_row_error() {
        let mut store = MockInventoryStore::new();
        store.expect_get_or_create_lab().returning(|_| Ok((lab(1), false)));
        store.expect_savepoint().returning(|| Ok(()));
        store.expect_release_savepoint().returning(|| Ok(()));
        store.expect_rollback_to_savepoint().times(1).returning(|| Ok(()));
        store.expect_equipment_exists().returning(|_, _| Ok(false));
        let mut calls = 0;
        store.expect_create_equipment().returning(move |data| {
            calls += 1;
            if calls == 1 {
                return Err(AppError::Validation("quantity must be at least 1".to_string()));
            }
            Ok(LabEquipment {
                id: 10,
                lab_id: data.lab_id,
                equipment_code: data.equipment_code.clone(),
                name: data.name.clone(),
                category: data.category,
                equipment_type: data.equipment_type,
                brand: None,
                model_name: None,
                quantity: data.quantity,
                status: data.status,
                is_networked: data.is_networked,
                installation_date: None,
                location_in_lab: None,
                remarks: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

        let report = import_lab_equipment(&mut store, &rows("code\nA-1\nA-2\n"), &ctx())
            .await
            .unwrap();
        assert_eq!(report.created, 1);
        assert_eq!(
            report.errors,
            vec!["Row 2: Validation error: quantity must be at least 1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_conflict_fails_the_batch() {
        let mut store = MockInventoryStore::new();
        store.expect_get_or_create_lab().returning(|_| Ok((lab(1), false)));
        store.expect_savepoint().returning(|| Ok(()));
        store.expect_equipment_exists().returning(|_, _| Ok(false));
        store
            .expect_create_equipment()
            .returning(|_| Err(AppError::Conflict("duplicate key".to_string())));

        let err = import_lab_equipment(&mut store, &rows("code\nA-1\n"), &ctx())
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Store(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_unknown_lab_id_creates_nothing() {
        let db = MemoryDatabase::default();
        let mut store = db.begin();
        let ctx = BatchContext::new(
            None,
            LabSelector {
                lab_id: Some(5),
                lab_name: None,
            },
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        );

        let err = import_lab_equipment(&mut store, &rows("code\nA-1\n"), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::LabNotFound(5)));
        drop(store);
        assert!(db.snapshot().equipment.is_empty());
    }
}
