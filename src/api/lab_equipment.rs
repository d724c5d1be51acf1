//! Lab equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::lab_equipment::{
        CreateLabEquipment, EquipmentDetail, LabEquipment, LabEquipmentQuery, UpdateLabEquipment,
    },
};

/// List lab equipment
#[utoipa::path(
    get,
    path = "/lab-equipment",
    tag = "lab-equipment",
    params(LabEquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<LabEquipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<LabEquipmentQuery>,
) -> AppResult<Json<Vec<LabEquipment>>> {
    let equipment = state.services.lab_equipment.list(&query).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/lab-equipment/{id}",
    tag = "lab-equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment", body = LabEquipment)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LabEquipment>> {
    let equipment = state.services.lab_equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/lab-equipment",
    tag = "lab-equipment",
    request_body = CreateLabEquipment,
    responses(
        (status = 201, description = "Equipment created", body = LabEquipment),
        (status = 409, description = "Code already used in this lab", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLabEquipment>,
) -> AppResult<(StatusCode, Json<LabEquipment>)> {
    let equipment = state.services.lab_equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/lab-equipment/{id}",
    tag = "lab-equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.lab_equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Detail sub-records of a piece of equipment
#[utoipa::path(
    get,
    path = "/lab-equipment/{id}/details",
    tag = "lab-equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Attached details", body = Vec<EquipmentDetail>)
    )
)]
pub async fn get_details(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<EquipmentDetail>>> {
    let details = state.services.lab_equipment.details(id).await?;
    Ok(Json(details))
}

/// Attach or replace one detail sub-record
#[utoipa::path(
    put,
    path = "/lab-equipment/{id}/details",
    tag = "lab-equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = EquipmentDetail,
    responses(
        (status = 200, description = "Details after the update", body = Vec<EquipmentDetail>),
        (status = 422, description = "Detail kind does not fit the equipment type", body = crate::error::ErrorResponse)
    )
)]
pub async fn put_detail(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(detail): Json<EquipmentDetail>,
) -> AppResult<Json<Vec<EquipmentDetail>>> {
    let details = state.services.lab_equipment.put_detail(id, &detail).await?;
    Ok(Json(details))
}

/// Update lab equipment; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/lab-equipment/{id}",
    tag = "lab-equipment",
    params(("id" = i32, Path, description = "Lab equipment ID")),
    request_body = UpdateLabEquipment,
    responses(
        (status = 200, description = "Lab equipment updated", body = LabEquipment),
        (status = 404, description = "Lab equipment not found", body = crate::error::ErrorResponse),
        (status = 422, description = "New type does not accept the existing details", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateLabEquipment>,
) -> AppResult<Json<LabEquipment>> {
    let updated = state.services.lab_equipment.update(id, &data).await?;
    Ok(Json(updated))
}
