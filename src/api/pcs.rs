//! PCs API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{
        pc::{CreatePc, Pc, UpdatePc},
        peripheral::Peripheral,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PcQuery {
    pub lab_id: Option<i32>,
}

/// List PCs
#[utoipa::path(
    get,
    path = "/pcs",
    tag = "pcs",
    params(PcQuery),
    responses(
        (status = 200, description = "PC list", body = Vec<Pc>)
    )
)]
pub async fn list_pcs(
    State(state): State<crate::AppState>,
    Query(query): Query<PcQuery>,
) -> AppResult<Json<Vec<Pc>>> {
    let pcs = state.services.pcs.list(query.lab_id).await?;
    Ok(Json(pcs))
}

/// Get PC by ID
#[utoipa::path(
    get,
    path = "/pcs/{id}",
    tag = "pcs",
    params(("id" = i32, Path, description = "PC ID")),
    responses(
        (status = 200, description = "PC", body = Pc)
    )
)]
pub async fn get_pc(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Pc>> {
    let pc = state.services.pcs.get_by_id(id).await?;
    Ok(Json(pc))
}

/// Create a PC
#[utoipa::path(
    post,
    path = "/pcs",
    tag = "pcs",
    request_body = CreatePc,
    responses(
        (status = 201, description = "PC created", body = Pc),
        (status = 409, description = "Device name already used in this lab", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_pc(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePc>,
) -> AppResult<(StatusCode, Json<Pc>)> {
    let pc = state.services.pcs.create(&data).await?;
    Ok((StatusCode::CREATED, Json(pc)))
}

/// Delete a PC
#[utoipa::path(
    delete,
    path = "/pcs/{id}",
    tag = "pcs",
    params(("id" = i32, Path, description = "PC ID")),
    responses(
        (status = 204, description = "PC deleted")
    )
)]
pub async fn delete_pc(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.pcs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Peripherals attached to a PC
#[utoipa::path(
    get,
    path = "/pcs/{id}/peripherals",
    tag = "pcs",
    params(("id" = i32, Path, description = "PC ID")),
    responses(
        (status = 200, description = "Peripherals", body = Vec<Peripheral>)
    )
)]
pub async fn list_pc_peripherals(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Peripheral>>> {
    let peripherals = state.services.pcs.peripherals(id).await?;
    Ok(Json(peripherals))
}

/// Update a PC; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/pcs/{id}",
    tag = "pcs",
    params(("id" = i32, Path, description = "PC ID")),
    request_body = UpdatePc,
    responses(
        (status = 200, description = "PC updated", body = Pc),
        (status = 404, description = "PC not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Device name already used in the lab", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_pc(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePc>,
) -> AppResult<Json<Pc>> {
    let updated = state.services.pcs.update(id, &data).await?;
    Ok(Json(updated))
}
