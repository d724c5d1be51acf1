//! Maintenance log API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::maintenance::{
        CreateMaintenanceLog, FixMaintenanceLog, MaintenanceLog, MaintenanceQuery,
        UpdateMaintenanceLog,
    },
};

/// List maintenance logs
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    params(MaintenanceQuery),
    responses(
        (status = 200, description = "Maintenance logs", body = Vec<MaintenanceLog>)
    )
)]
pub async fn list_logs(
    State(state): State<crate::AppState>,
    Query(query): Query<MaintenanceQuery>,
) -> AppResult<Json<Vec<MaintenanceLog>>> {
    let logs = state.services.maintenance.list(&query).await?;
    Ok(Json(logs))
}

/// Get a maintenance log by ID
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance log ID")),
    responses(
        (status = 200, description = "Maintenance log", body = MaintenanceLog),
        (status = 404, description = "Log not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MaintenanceLog>> {
    let log = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(log))
}

/// Report an issue
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = CreateMaintenanceLog,
    responses(
        (status = 201, description = "Log opened", body = MaintenanceLog),
        (status = 400, description = "Not exactly one target", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_log(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenanceLog>,
) -> AppResult<(StatusCode, Json<MaintenanceLog>)> {
    let log = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// Mark an issue as fixed
#[utoipa::path(
    post,
    path = "/maintenance/{id}/fix",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance log ID")),
    request_body = FixMaintenanceLog,
    responses(
        (status = 200, description = "Log closed", body = MaintenanceLog),
        (status = 422, description = "Already fixed", body = crate::error::ErrorResponse)
    )
)]
pub async fn fix_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<FixMaintenanceLog>,
) -> AppResult<Json<MaintenanceLog>> {
    let log = state.services.maintenance.fix(id, &data).await?;
    Ok(Json(log))
}

/// Edit a maintenance log; setting status FIXED stamps the fix time
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance log ID")),
    request_body = UpdateMaintenanceLog,
    responses(
        (status = 200, description = "Maintenance log updated", body = MaintenanceLog),
        (status = 404, description = "Maintenance log not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMaintenanceLog>,
) -> AppResult<Json<MaintenanceLog>> {
    let updated = state.services.maintenance.update(id, &data).await?;
    Ok(Json(updated))
}

/// Delete a maintenance log
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance log ID")),
    responses(
        (status = 204, description = "Log deleted")
    )
)]
pub async fn delete_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
