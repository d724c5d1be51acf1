//! Inventory summary endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, models::inventory::InventoryEntry};

#[derive(Debug, Deserialize, IntoParams)]
pub struct InventoryQuery {
    pub lab_id: Option<i32>,
}

/// Equipment quantities per lab and type
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "Inventory summary", body = Vec<InventoryEntry>)
    )
)]
pub async fn get_inventory(
    State(state): State<crate::AppState>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<Vec<InventoryEntry>>> {
    let entries = state.services.lab_equipment.inventory(query.lab_id).await?;
    Ok(Json(entries))
}
