//! Resolves the single lab an import batch is attached to

use chrono::NaiveDate;

use super::{error::ImportError, store::InventoryStore};
use crate::models::lab::Lab;

/// Caller's choice of target lab; both empty means "derive from the file"
#[derive(Debug, Clone, Default)]
pub struct LabSelector {
    pub lab_id: Option<i32>,
    pub lab_name: Option<String>,
}

/// Width of `labs.name`
const LAB_NAME_MAX: usize = 100;

/// `Imported_<file stem>_<YYYYMMDD>`, or `Imported_Lab_<YYYYMMDD>` without a
/// file name. Long stems are cut so the name fits a lab name column.
pub fn generated_lab_name(file_name: Option<&str>, today: NaiveDate) -> String {
    let date = today.format("%Y%m%d").to_string();
    match file_name.and_then(file_stem) {
        Some(stem) => {
            let room = LAB_NAME_MAX - "Imported__".len() - date.len();
            let stem: String = stem.chars().take(room).collect();
            format!("Imported_{}_{}", stem.trim_end(), date)
        }
        None => format!("Imported_Lab_{}", date),
    }
}

fn file_stem(file_name: &str) -> Option<&str> {
    let base = file_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_name);
    let stem = match base.rfind('.') {
        Some(dot) if dot > 0 => &base[..dot],
        _ => base,
    };
    let stem = stem.trim();
    (!stem.is_empty()).then_some(stem)
}

/// Explicit id (must exist), else explicit name, else a generated name.
/// Names are get-or-create.
pub async fn resolve_lab<S: InventoryStore>(
    store: &mut S,
    file_name: Option<&str>,
    selector: &LabSelector,
    today: NaiveDate,
) -> Result<Lab, ImportError> {
    if let Some(id) = selector.lab_id {
        return store.find_lab(id).await?.ok_or(ImportError::LabNotFound(id));
    }

    let name = selector
        .lab_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| generated_lab_name(file_name, today));

    let (lab, created) = store.get_or_create_lab(&name).await?;
    if created {
        tracing::info!("Created lab '{}' (id={}) for import", lab.name, lab.id);
    }
    Ok(lab)
}
