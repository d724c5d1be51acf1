//! Peripherals API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::peripheral::{CreatePeripheral, Peripheral, PeripheralQuery, UpdatePeripheral},
};

/// List peripherals
#[utoipa::path(
    get,
    path = "/peripherals",
    tag = "peripherals",
    params(PeripheralQuery),
    responses(
        (status = 200, description = "Peripheral list", body = Vec<Peripheral>)
    )
)]
pub async fn list_peripherals(
    State(state): State<crate::AppState>,
    Query(query): Query<PeripheralQuery>,
) -> AppResult<Json<Vec<Peripheral>>> {
    let peripherals = state.services.peripherals.list(&query).await?;
    Ok(Json(peripherals))
}

/// Get peripheral by ID
#[utoipa::path(
    get,
    path = "/peripherals/{id}",
    tag = "peripherals",
    params(("id" = i32, Path, description = "Peripheral ID")),
    responses(
        (status = 200, description = "Peripheral details", body = Peripheral),
        (status = 404, description = "Peripheral not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_peripheral(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Peripheral>> {
    let peripheral = state.services.peripherals.get_by_id(id).await?;
    Ok(Json(peripheral))
}

/// Attach a peripheral to a PC
#[utoipa::path(
    post,
    path = "/peripherals",
    tag = "peripherals",
    request_body = CreatePeripheral,
    responses(
        (status = 201, description = "Peripheral created", body = Peripheral)
    )
)]
pub async fn create_peripheral(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePeripheral>,
) -> AppResult<(StatusCode, Json<Peripheral>)> {
    let peripheral = state.services.peripherals.create(&data).await?;
    Ok((StatusCode::CREATED, Json(peripheral)))
}

/// Remove a peripheral
#[utoipa::path(
    delete,
    path = "/peripherals/{id}",
    tag = "peripherals",
    params(("id" = i32, Path, description = "Peripheral ID")),
    responses(
        (status = 204, description = "Peripheral deleted")
    )
)]
pub async fn delete_peripheral(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.peripherals.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update a peripheral; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/peripherals/{id}",
    tag = "peripherals",
    params(("id" = i32, Path, description = "Peripheral ID")),
    request_body = UpdatePeripheral,
    responses(
        (status = 200, description = "Peripheral updated", body = Peripheral),
        (status = 404, description = "Peripheral not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_peripheral(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePeripheral>,
) -> AppResult<Json<Peripheral>> {
    let updated = state.services.peripherals.update(id, &data).await?;
    Ok(Json(updated))
}
