use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inventory::{InventoryAlertDto, InventoryDto, RestockDto, SetInventoryDto},
    },
    server::{error::Error, model::app::AppState, service::inventory::InventoryService},
};

pub static INVENTORY_TAG: &str = "inventory";

/// Get stock counts for all enabled patch types
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "Success when retrieving inventory", body = Vec<InventoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let inventory = InventoryService::new(&state.db).get_inventory().await?;

    Ok((StatusCode::OK, Json(inventory)))
}

/// Overwrite the stock count of a patch type
#[utoipa::path(
    put,
    path = "/api/inventory/{patch_type_id}",
    tag = INVENTORY_TAG,
    params(("patch_type_id" = i32, Path, description = "Patch type ID")),
    request_body = SetInventoryDto,
    responses(
        (status = 200, description = "Inventory updated", body = InventoryDto),
        (status = 400, description = "Negative count", body = ErrorDto),
        (status = 404, description = "Patch type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_inventory_count(
    State(state): State<AppState>,
    Path(patch_type_id): Path<i32>,
    Json(request): Json<SetInventoryDto>,
) -> Result<impl IntoResponse, Error> {
    let entry = InventoryService::new(&state.db)
        .set_count(patch_type_id, request.count)
        .await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Add units to the stock of a patch type
#[utoipa::path(
    post,
    path = "/api/inventory/{patch_type_id}/restock",
    tag = INVENTORY_TAG,
    params(("patch_type_id" = i32, Path, description = "Patch type ID")),
    request_body = RestockDto,
    responses(
        (status = 200, description = "Inventory restocked", body = InventoryDto),
        (status = 400, description = "Amount is not positive", body = ErrorDto),
        (status = 404, description = "Patch type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn restock_inventory(
    State(state): State<AppState>,
    Path(patch_type_id): Path<i32>,
    Json(request): Json<RestockDto>,
) -> Result<impl IntoResponse, Error> {
    let entry = InventoryService::new(&state.db)
        .restock(patch_type_id, request.amount)
        .await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Get patch types that are running low or out of stock
#[utoipa::path(
    get,
    path = "/api/inventory/alerts",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "Success when retrieving stock alerts", body = Vec<InventoryAlertDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory_alerts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let alerts = InventoryService::new(&state.db)
        .get_alerts(state.settings.low_inventory_threshold)
        .await?;

    Ok((StatusCode::OK, Json(alerts)))
}
