//! Bulk import service: load, run the entity importer, commit

use chrono::Local;

use crate::{
    importer::{
        import_lab_equipment, import_labs, import_pcs, load_rows, BatchContext, ImportError,
        LabSelector,
    },
    models::import_report::{ImportEntity, ImportReport},
    repository::Repository,
};

#[derive(Clone)]
pub struct ImportService {
    repository: Repository,
}

impl ImportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Import one uploaded file as a single transaction.
    ///
    /// Row problems are reported in the returned report. Any error returned
    /// here means nothing from the file was kept.
    pub async fn import(
        &self,
        entity: ImportEntity,
        file_name: Option<String>,
        content: &[u8],
        selector: LabSelector,
    ) -> Result<ImportReport, ImportError> {
        let display_name = file_name.as_deref().unwrap_or("<unnamed>").to_string();
        let rows = match load_rows(file_name.as_deref().unwrap_or_default(), content) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!("Import of '{}' rejected: {}", display_name, err);
                return Err(err.into());
            }
        };
        tracing::info!(
            "Importing {} from '{}' ({} rows)",
            entity.as_str(),
            display_name,
            rows.len()
        );

        let ctx = BatchContext::new(file_name, selector, Local::now().date_naive());
        let mut store = self.repository.begin_import().await?;
        let result = match entity {
            ImportEntity::Labs => import_labs(&mut store, &rows).await,
            ImportEntity::Pcs => import_pcs(&mut store, &rows, &ctx).await,
            ImportEntity::LabEquipment => import_lab_equipment(&mut store, &rows, &ctx).await,
        };

        match result {
            Ok(report) => {
                store.commit().await?;
                tracing::info!(
                    "Imported {} from '{}': created={} skipped={} errors={}",
                    entity.as_str(),
                    display_name,
                    report.created,
                    report.skipped,
                    report.errors.len()
                );
                Ok(report)
            }
            // dropping the store rolls the batch back
            Err(err) => {
                tracing::warn!("Import of '{}' failed, rolled back: {}", display_name, err);
                Err(err)
            }
        }
    }
}
