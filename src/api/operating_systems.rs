//! Per-PC operating system API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        os::{CreateOperatingSystem, OperatingSystem, UpdateOperatingSystem},
        pc::PcPartQuery,
    },
};

/// List operating system records, optionally for one PC
#[utoipa::path(
    get,
    path = "/os",
    tag = "os",
    params(PcPartQuery),
    responses(
        (status = 200, description = "Operating system records", body = Vec<OperatingSystem>)
    )
)]
pub async fn list_operating_systems(
    State(state): State<crate::AppState>,
    Query(query): Query<PcPartQuery>,
) -> AppResult<Json<Vec<OperatingSystem>>> {
    let rows = state.services.operating_systems.list(query.pc_id).await?;
    Ok(Json(rows))
}

/// Get a operating system record by ID
#[utoipa::path(
    get,
    path = "/os/{id}",
    tag = "os",
    params(("id" = i32, Path, description = "Operating system record ID")),
    responses(
        (status = 200, description = "Operating system record", body = OperatingSystem),
        (status = 404, description = "Operating system record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_operating_system(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OperatingSystem>> {
    let row = state.services.operating_systems.get_by_id(id).await?;
    Ok(Json(row))
}

/// Record the operating system of a PC
#[utoipa::path(
    post,
    path = "/os",
    tag = "os",
    request_body = CreateOperatingSystem,
    responses(
        (status = 201, description = "Operating system recorded", body = OperatingSystem),
        (status = 404, description = "PC not found", body = crate::error::ErrorResponse),
        (status = 409, description = "PC already has a operating system record", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_operating_system(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateOperatingSystem>,
) -> AppResult<(StatusCode, Json<OperatingSystem>)> {
    let row = state.services.operating_systems.create(&data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a operating system record; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/os/{id}",
    tag = "os",
    params(("id" = i32, Path, description = "Operating system record ID")),
    request_body = UpdateOperatingSystem,
    responses(
        (status = 200, description = "Operating system record updated", body = OperatingSystem),
        (status = 404, description = "Operating system record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_operating_system(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateOperatingSystem>,
) -> AppResult<Json<OperatingSystem>> {
    let row = state.services.operating_systems.update(id, &data).await?;
    Ok(Json(row))
}

/// Delete a operating system record
#[utoipa::path(
    delete,
    path = "/os/{id}",
    tag = "os",
    params(("id" = i32, Path, description = "Operating system record ID")),
    responses(
        (status = 204, description = "Operating system record deleted")
    )
)]
pub async fn delete_operating_system(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.operating_systems.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
