//! PCs importer

use super::{
    columns::{parse_bool, resolve, resolve_text},
    error::{ImportError, RowError},
    lab_resolver::resolve_lab,
    loader::Row,
    store::InventoryStore,
    BatchContext, RowOutcome,
};
use crate::{
    error::AppError,
    models::{enums::DeviceStatus, import_report::ImportReport, lab::Lab, pc::CreatePc},
};

const DEVICE_NAME: &[&str] = &["device_name", "name", "pc_name", "pc_name_comp_id"];
const STATUS: &[&str] = &["status"];
const PRODUCT_ID: &[&str] = &["product_id"];
const PROCESSOR: &[&str] = &["processor"];
const RAM: &[&str] = &["ram"];
const STORAGE: &[&str] = &["storage"];
const BRAND: &[&str] = &["brand"];
const SERIAL: &[&str] = &["serial_number", "serial"];
const CONNECTED: &[&str] = &["connected"];
const GPU: &[&str] = &["gpu"];
const PERIPHERALS: &[&str] = &["peripherals"];

/// Unknown or missing status text is treated as working, without a report.
pub fn device_status(raw: Option<String>) -> DeviceStatus {
    raw.and_then(|s| DeviceStatus::from_text(&s.trim().to_lowercase()))
        .unwrap_or_default()
}

/// Pure row mapping
pub fn pc_from_row(row: &Row, lab: &Lab) -> Result<CreatePc, RowError> {
    let device_name =
        resolve_text(row, DEVICE_NAME).ok_or(RowError::MissingField { label: "Device name" })?;

    Ok(CreatePc {
        lab_id: lab.id,
        device_name,
        product_id: resolve_text(row, PRODUCT_ID),
        processor: resolve_text(row, PROCESSOR),
        ram: resolve_text(row, RAM),
        storage: resolve_text(row, STORAGE),
        status: device_status(resolve_text(row, STATUS)),
        connected: parse_bool(resolve(row, CONNECTED)),
        gpu: parse_bool(resolve(row, GPU)),
        peripherals: parse_bool(resolve(row, PERIPHERALS)),
        brand: resolve_text(row, BRAND),
        serial_number: resolve_text(row, SERIAL),
    })
}

async fn import_row<S: InventoryStore>(
    store: &mut S,
    data: &CreatePc,
) -> Result<RowOutcome, AppError> {
    if store.pc_exists(data.lab_id, &data.device_name).await? {
        return Ok(RowOutcome::Skipped);
    }
    let pc = store.create_pc(data).await?;
    tracing::debug!("Imported PC '{}' (id={})", pc.device_name, pc.id);
    Ok(RowOutcome::Created)
}

/// Create every PC in `rows` under the one lab resolved for the batch.
///
/// A value the store refuses fails only its row; other store failures end
/// the batch.
pub async fn import_pcs<S: InventoryStore>(
    store: &mut S,
    rows: &[Row],
    ctx: &BatchContext,
) -> Result<ImportReport, ImportError> {
    let lab = resolve_lab(store, ctx.file_name.as_deref(), &ctx.selector, ctx.today).await?;
    let mut report = ImportReport::for_lab(&lab);

    for row in rows {
        let data = match pc_from_row(row, &lab) {
            Ok(data) => data,
            Err(err) => {
                report.row_error(row.number(), err);
                continue;
            }
        };

        store.savepoint().await?;
        match import_row(store, &data).await {
            Ok(outcome) => {
                store.release_savepoint().await?;
                match outcome {
                    RowOutcome::Created => report.created += 1,
                    RowOutcome::Skipped => report.skipped += 1,
                }
            }
            Err(AppError::Validation(message)) => {
                store.rollback_to_savepoint().await?;
                report.row_error(row.number(), RowError::Store(message));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(report)
}
