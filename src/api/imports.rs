//! Bulk import endpoint

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use axum_extra::extract::{multipart::Field, Multipart};
use utoipa::ToSchema;

use crate::{
    importer::{ImportError, LabSelector},
    models::import_report::{ImportEntity, ImportFailure, ImportResponse},
};

const MISSING_FIELDS: &str = "file and entity are required (labs | pcs | lab-equipment)";

/// Multipart form accepted by the import endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImportUpload {
    /// CSV, XLSX or XLS file; the first row holds the headers
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// `labs`, `pcs` or `lab-equipment`
    entity: String,
    /// Existing lab to import into
    lab_id: Option<i32>,
    /// Lab to import into, created when missing
    lab_name: Option<String>,
}

#[derive(Default)]
struct ImportForm {
    file: Option<(Option<String>, Bytes)>,
    entity: Option<String>,
    selector: LabSelector,
}

fn malformed(err: impl std::fmt::Display) -> ImportError {
    ImportError::Request(format!("Malformed upload: {}", err))
}

async fn text(field: Field) -> Result<Option<String>, ImportError> {
    let value = field.text().await.map_err(malformed)?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

async fn read_form(mut multipart: Multipart, limit: usize) -> Result<ImportForm, ImportError> {
    let mut form = ImportForm::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content = field.bytes().await.map_err(malformed)?;
                if content.len() > limit {
                    return Err(ImportError::Request(format!(
                        "File exceeds the {} MB upload limit",
                        limit / (1024 * 1024)
                    )));
                }
                form.file = Some((file_name, content));
            }
            "entity" => form.entity = text(field).await?,
            "lab_id" => {
                form.selector.lab_id = text(field)
                    .await?
                    .map(|raw| {
                        raw.parse::<i32>()
                            .map_err(|_| ImportError::Request("lab_id must be an integer".to_string()))
                    })
                    .transpose()?;
            }
            "lab_name" => form.selector.lab_name = text(field).await?,
            _ => {}
        }
    }

    Ok(form)
}

/// Import labs, PCs or lab equipment from a spreadsheet
///
/// The whole file is one transaction. Row problems are listed in `errors`;
/// anything returned as `detail` means nothing was imported.
#[utoipa::path(
    post,
    path = "/labs/import",
    tag = "import",
    request_body(content = ImportUpload, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File imported", body = ImportResponse),
        (status = 400, description = "Bad form or unreadable file", body = ImportFailure),
        (status = 404, description = "lab_id does not exist", body = ImportFailure),
        (status = 409, description = "Lost a race with a concurrent import", body = ImportFailure),
        (status = 500, description = "Import failed", body = ImportFailure)
    )
)]
pub async fn import_file(
    State(state): State<crate::AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ImportResponse>), ImportError> {
    let form = read_form(multipart, state.config.import.max_upload_bytes()).await?;

    let (Some((file_name, content)), Some(entity)) = (form.file, form.entity) else {
        return Err(ImportError::Request(MISSING_FIELDS.to_string()));
    };
    let entity = ImportEntity::from_form(&entity)
        .ok_or_else(|| ImportError::Request("Invalid entity".to_string()))?;

    let report = state
        .services
        .imports
        .import(entity, file_name, &content, form.selector)
        .await?;

    Ok((StatusCode::CREATED, Json(ImportResponse::success(entity, report))))
}
