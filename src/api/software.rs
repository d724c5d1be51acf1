//! Installed software API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::software::{CreateSoftware, Software, SoftwareQuery, UpdateSoftware},
};

/// List installed software
#[utoipa::path(
    get,
    path = "/software",
    tag = "software",
    params(SoftwareQuery),
    responses(
        (status = 200, description = "Software list", body = Vec<Software>)
    )
)]
pub async fn list_software(
    State(state): State<crate::AppState>,
    Query(query): Query<SoftwareQuery>,
) -> AppResult<Json<Vec<Software>>> {
    let software = state.services.software.list(&query).await?;
    Ok(Json(software))
}

/// Get software by ID
#[utoipa::path(
    get,
    path = "/software/{id}",
    tag = "software",
    params(("id" = i32, Path, description = "Software ID")),
    responses(
        (status = 200, description = "Software details", body = Software),
        (status = 404, description = "Software not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_software(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Software>> {
    let software = state.services.software.get_by_id(id).await?;
    Ok(Json(software))
}

/// Register software on a PC
#[utoipa::path(
    post,
    path = "/software",
    tag = "software",
    request_body = CreateSoftware,
    responses(
        (status = 201, description = "Software registered", body = Software),
        (status = 409, description = "Same name and version already on this PC", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_software(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateSoftware>,
) -> AppResult<(StatusCode, Json<Software>)> {
    let software = state.services.software.create(&data).await?;
    Ok((StatusCode::CREATED, Json(software)))
}

/// Remove software
#[utoipa::path(
    delete,
    path = "/software/{id}",
    tag = "software",
    params(("id" = i32, Path, description = "Software ID")),
    responses(
        (status = 204, description = "Software deleted")
    )
)]
pub async fn delete_software(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.software.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update installed software; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/software/{id}",
    tag = "software",
    params(("id" = i32, Path, description = "Software ID")),
    request_body = UpdateSoftware,
    responses(
        (status = 200, description = "Software updated", body = Software),
        (status = 404, description = "Software not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_software(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateSoftware>,
) -> AppResult<Json<Software>> {
    let updated = state.services.software.update(id, &data).await?;
    Ok(Json(updated))
}
