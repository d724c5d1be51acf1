//! Labs API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        lab::{CreateLab, Lab, UpdateLab},
        lab_equipment::LabEquipment,
        pc::Pc,
    },
};

/// List all labs
#[utoipa::path(
    get,
    path = "/labs",
    tag = "labs",
    responses(
        (status = 200, description = "Lab list", body = Vec<Lab>)
    )
)]
pub async fn list_labs(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Lab>>> {
    let labs = state.services.labs.list().await?;
    Ok(Json(labs))
}

/// Get lab by ID
#[utoipa::path(
    get,
    path = "/labs/{id}",
    tag = "labs",
    params(("id" = i32, Path, description = "Lab ID")),
    responses(
        (status = 200, description = "Lab", body = Lab),
        (status = 404, description = "Lab not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_lab(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Lab>> {
    let lab = state.services.labs.get_by_id(id).await?;
    Ok(Json(lab))
}

/// Create a lab
#[utoipa::path(
    post,
    path = "/labs",
    tag = "labs",
    request_body = CreateLab,
    responses(
        (status = 201, description = "Lab created", body = Lab),
        (status = 400, description = "Blank name", body = crate::error::ErrorResponse),
        (status = 409, description = "Name already taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_lab(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLab>,
) -> AppResult<(StatusCode, Json<Lab>)> {
    let lab = state.services.labs.create(&data).await?;
    Ok((StatusCode::CREATED, Json(lab)))
}

/// Delete a lab and everything in it
#[utoipa::path(
    delete,
    path = "/labs/{id}",
    tag = "labs",
    params(("id" = i32, Path, description = "Lab ID")),
    responses(
        (status = 204, description = "Lab deleted")
    )
)]
pub async fn delete_lab(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.labs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PCs in a lab
#[utoipa::path(
    get,
    path = "/labs/{id}/pcs",
    tag = "labs",
    params(("id" = i32, Path, description = "Lab ID")),
    responses(
        (status = 200, description = "PCs in the lab", body = Vec<Pc>)
    )
)]
pub async fn list_lab_pcs(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Pc>>> {
    let pcs = state.services.labs.pcs(id).await?;
    Ok(Json(pcs))
}

/// Equipment in a lab
#[utoipa::path(
    get,
    path = "/labs/{id}/lab-equipment",
    tag = "labs",
    params(("id" = i32, Path, description = "Lab ID")),
    responses(
        (status = 200, description = "Equipment in the lab", body = Vec<LabEquipment>)
    )
)]
pub async fn list_lab_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<LabEquipment>>> {
    let equipment = state.services.labs.equipment(id).await?;
    Ok(Json(equipment))
}

/// Update a lab; omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/labs/{id}",
    tag = "labs",
    params(("id" = i32, Path, description = "Lab ID")),
    request_body = UpdateLab,
    responses(
        (status = 200, description = "Lab updated", body = Lab),
        (status = 404, description = "Lab not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Name already taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_lab(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateLab>,
) -> AppResult<Json<Lab>> {
    let updated = state.services.labs.update(id, &data).await?;
    Ok(Json(updated))
}
