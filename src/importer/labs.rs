//! Labs importer

use super::{
    columns::resolve_text,
    error::{ImportError, RowError},
    loader::Row,
    store::InventoryStore,
    RowOutcome,
};
use crate::{
    error::AppError,
    models::{import_report::ImportReport, lab::CreateLab},
};

const NAME: &[&str] = &["name", "lab_name", "labname"];
const LOCATION: &[&str] = &["location", "lab_location"];

/// Pure row mapping
pub fn lab_from_row(row: &Row) -> Result<CreateLab, RowError> {
    let name = resolve_text(row, NAME).ok_or(RowError::MissingField { label: "Lab name" })?;
    Ok(CreateLab {
        name,
        location: resolve_text(row, LOCATION),
    })
}

async fn import_row<S: InventoryStore>(
    store: &mut S,
    data: &CreateLab,
) -> Result<RowOutcome, AppError> {
    // Lab names are unique across the whole inventory, not just this file
    if store.lab_exists(&data.name).await? {
        return Ok(RowOutcome::Skipped);
    }
    let lab = store.create_lab(data).await?;
    tracing::debug!("Imported lab '{}' (id={})", lab.name, lab.id);
    Ok(RowOutcome::Created)
}

/// Create every lab in `rows` that does not exist yet.
///
/// Rows without a name, and rows holding a value the store refuses, are
/// reported and skipped over. Any other store failure ends the batch.
pub async fn import_labs<S: InventoryStore>(
    store: &mut S,
    rows: &[Row],
) -> Result<ImportReport, ImportError> {
    let mut report = ImportReport::new();

    for row in rows {
        let data = match lab_from_row(row) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::importer::{loader::load_rows, memory::MemoryDatabase, store::MockInventoryStore};

    fn rows(csv: &str) -> Vec<Row> {
        load_rows("labs.csv", csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_lab_from_row_aliases() {
        let rows = rows("Lab Name,Lab Location\nChemistry,Block C\n");
        let lab = lab_from_row(&rows[0]).unwrap();
        assert_eq!(lab.name, "Chemistry");
        assert_eq!(lab.location.as_deref(), Some("Block C"));
    }

    #[tokio::test]
    async fn test_duplicate_name_in_file_is_skipped() {
        let db = MemoryDatabase::default();
        let mut store = db.begin();

        let rows = rows("name,location\nLab A,Block 1\nLab A,Block 2\n");
        let report = import_labs(&mut store, &rows).await.unwrap();
        store.commit();

        assert_eq!(report.created, 1);
        assert_eq!(report.skipped, 1);
        assert!(report.errors.is_empty());

        let snapshot = db.snapshot();
        assert_eq!(snapshot.labs.len(), 1);
        assert_eq!(snapshot.labs[0].location.as_deref(), Some("Block 1"));
    }

    #[tokio::test]
    async fn test_missing_name_is_a_row_error() {
        let db = MemoryDatabase::default();
        let mut store = db.begin();

        let rows = rows("name,location\n,Block 1\nLab B,\n");
        let report = import_labs(&mut store, &rows).await.unwrap();

        assert_eq!(report.created, 1);
        assert_eq!(report.errors, vec!["Row 2: Lab name is required".to_string()]);
    }

    #[tokio::test]
    async fn test_reimport_only_skips() {
        let db = MemoryDatabase::default();
        let rows = rows("name\nLab A\nLab B\nLab C\n");

        let mut first = db.begin();
        let report = import_labs(&mut first, &rows).await.unwrap();
        first.commit();
        assert_eq!(report.created, 3);

        let mut second = db.begin();
        let report = import_labs(&mut second, &rows).await.unwrap();
        second.commit();
        assert_eq!((report.created, report.skipped), (0, 3));
        assert_eq!(db.snapshot().labs.len(), 3);
    }

    #[tokio::test]
    async fn test_uncommitted_batch_leaves_nothing() {
        let db = MemoryDatabase::default();
        let mut store = db.begin();
        import_labs(&mut store, &rows("name\nLab A\n")).await.unwrap();
        drop(store);

        assert!(db.snapshot().labs.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_fails_the_batch() {
        let mut store = MockInventoryStore::new();
        store.expect_savepoint().returning(|| Ok(()));
        store.expect_lab_exists().returning(|_| Ok(false));
        store
            .expect_create_lab()
            .returning(|_| Err(AppError::Internal("connection reset".to_string())));

        let err = import_labs(&mut store, &rows("name\nLab A\n")).await.unwrap_err();
        assert!(matches!(err, ImportError::Store(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_refused_value_fails_only_its_row() {
        let long_name = "L".repeat(120);
        let db = MemoryDatabase::default();
        let mut store = db.begin();

        let rows = rows(&format!("name\n{long_name}\nLab B\n"));
        let report = import_labs(&mut store, &rows).await.unwrap();
        store.commit();

        assert_eq!((report.created, report.skipped), (1, 0));
        assert_eq!(
            report.errors,
            vec!["Row 2: value too long for type character varying(100)".to_string()]
        );
        let snapshot = db.snapshot();
        assert_eq!(snapshot.labs.len(), 1);
        assert_eq!(snapshot.labs[0].name, "Lab B");
    }
}
