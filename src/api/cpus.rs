//! Per-PC CPU API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        cpu::{CreateCpu, Cpu, UpdateCpu},
        pc::PcPartQuery,
    },
};

/// List CPU records, optionally for one PC
#[utoipa::path(
    get,
    path = "/cpu",
    tag = "cpu",
    params(PcPartQuery),
    responses(
        (status = 200, description = "CPU records", body = Vec<Cpu>)
    )
)]
pub async fn list_cpus(
    State(state): State<crate::AppState>,
    Query(query): Query<PcPartQuery>,
) -> AppResult<Json<Vec<Cpu>>> {
    let rows = state.services.cpus.list(query.pc_id).await?;
    Ok(Json(rows))
}

/// Get a CPU record by ID
#[utoipa::path(
    get,
    path = "/cpu/{id}",
    tag = "cpu",
    params(("id" = i32, Path, description = "CPU record ID")),
    responses(
        (status = 200, description = "CPU record", body = Cpu),
        (status = 404, description = "CPU record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_cpu(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Cpu>> {
    let row = state.services.cpus.get_by_id(id).await?;
    Ok(Json(row))
}

/// Record the CPU of a PC
#[utoipa::path(
    post,
    path = "/cpu",
    tag = "cpu",
    request_body = CreateCpu,
    responses(
        (status = 201, description = "CPU recorded", body = Cpu),
        (status = 404, description = "PC not found", body = crate::error::ErrorResponse),
        (status = 409, description = "PC already has a CPU record", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_cpu(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCpu>,
) -> AppResult<(StatusCode, Json<Cpu>)> {
    let row = state.services.cpus.create(&data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a CPU record; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/cpu/{id}",
    tag = "cpu",
    params(("id" = i32, Path, description = "CPU record ID")),
    request_body = UpdateCpu,
    responses(
        (status = 200, description = "CPU record updated", body = Cpu),
        (status = 404, description = "CPU record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_cpu(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateCpu>,
) -> AppResult<Json<Cpu>> {
    let row = state.services.cpus.update(id, &data).await?;
    Ok(Json(row))
}

/// Delete a CPU record
#[utoipa::path(
    delete,
    path = "/cpu/{id}",
    tag = "cpu",
    params(("id" = i32, Path, description = "CPU record ID")),
    responses(
        (status = 204, description = "CPU record deleted")
    )
)]
pub async fn delete_cpu(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.cpus.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
