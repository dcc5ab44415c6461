use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        inventory::InventoryDto,
        patch::{ActivePatchDto, ApplyPatchDto, LocationSuggestionDto},
    },
    server::{error::Error, model::app::AppState, service::patch::PatchService},
};

pub static PATCH_TAG: &str = "patch";

/// Get all worn patches, soonest change first
#[utoipa::path(
    get,
    path = "/api/patches",
    tag = PATCH_TAG,
    responses(
        (status = 200, description = "Success when retrieving active patches", body = Vec<ActivePatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_patches(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let now = Utc::now().naive_utc();

    let active_patches: Vec<ActivePatchDto> = PatchService::new(&state.db)
        .get_active_patches(now)
        .await?
        .into_iter()
        .map(ActivePatchDto::from)
        .collect();

    Ok((StatusCode::OK, Json(active_patches)))
}

/// Apply a patch, using one unit of stock
#[utoipa::path(
    post,
    path = "/api/patches",
    tag = PATCH_TAG,
    request_body = ApplyPatchDto,
    responses(
        (status = 201, description = "Patch applied", body = ActivePatchDto),
        (status = 400, description = "Blank location, future application time or disabled patch type", body = ErrorDto),
        (status = 404, description = "Patch type not found", body = ErrorDto),
        (status = 409, description = "No stock left", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_patch(
    State(state): State<AppState>,
    Json(request): Json<ApplyPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let now = Utc::now().naive_utc();

    let active_patch = PatchService::new(&state.db)
        .apply_patch(request, now)
        .await?;

    Ok((StatusCode::CREATED, Json(ActivePatchDto::from(active_patch))))
}

/// Remove a worn patch without returning it to stock
#[utoipa::path(
    delete,
    path = "/api/patches/{id}",
    tag = PATCH_TAG,
    params(("id" = i32, Path, description = "Patch application ID")),
    responses(
        (status = 204, description = "Patch removed"),
        (status = 404, description = "Patch application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_patch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PatchService::new(&state.db).remove_patch(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Undo an application, returning its unit to stock
#[utoipa::path(
    post,
    path = "/api/patches/{id}/unapply",
    tag = PATCH_TAG,
    params(("id" = i32, Path, description = "Patch application ID")),
    responses(
        (status = 200, description = "Patch unapplied, returns the restored inventory", body = InventoryDto),
        (status = 404, description = "Patch application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unapply_patch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let entry = PatchService::new(&state.db).unapply_patch(id).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Suggest where to apply the next patch
#[utoipa::path(
    get,
    path = "/api/patches/next-location",
    tag = PATCH_TAG,
    responses(
        (status = 200, description = "Suggested body location", body = LocationSuggestionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_next_location(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let location = PatchService::new(&state.db).suggest_location().await?;

    Ok((StatusCode::OK, Json(LocationSuggestionDto { location })))
}
