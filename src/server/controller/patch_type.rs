use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        patch::{PatchTypeDto, PatchTypeRequestDto, SetEnabledDto},
    },
    server::{error::Error, model::app::AppState, service::patch_type::PatchTypeService},
};

pub static PATCH_TYPE_TAG: &str = "patch type";

/// List all patch types, built-in and custom
#[utoipa::path(
    get,
    path = "/api/patch-types",
    tag = PATCH_TYPE_TAG,
    responses(
        (status = 200, description = "Success when retrieving patch types", body = Vec<PatchTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patch_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let patch_types = PatchTypeService::new(&state.db).get_patch_types().await?;

    Ok((StatusCode::OK, Json(patch_types)))
}

/// Create a custom patch type with an empty inventory entry
#[utoipa::path(
    post,
    path = "/api/patch-types",
    tag = PATCH_TYPE_TAG,
    request_body = PatchTypeRequestDto,
    responses(
        (status = 201, description = "Patch type created", body = PatchTypeDto),
        (status = 400, description = "Blank name or invalid duration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_patch_type(
    State(state): State<AppState>,
    Json(request): Json<PatchTypeRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let patch_type = PatchTypeService::new(&state.db)
        .create_patch_type(&request.name, request.duration_hours)
        .await?;

    Ok((StatusCode::CREATED, Json(patch_type)))
}

/// Rename or change the duration of a custom patch type
#[utoipa::path(
    put,
    path = "/api/patch-types/{id}",
    tag = PATCH_TYPE_TAG,
    params(("id" = i32, Path, description = "Patch type ID")),
    request_body = PatchTypeRequestDto,
    responses(
        (status = 200, description = "Patch type updated", body = PatchTypeDto),
        (status = 400, description = "Blank name or invalid duration", body = ErrorDto),
        (status = 403, description = "Built-in patch types cannot be edited", body = ErrorDto),
        (status = 404, description = "Patch type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_patch_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchTypeRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let patch_type = PatchTypeService::new(&state.db)
        .update_patch_type(id, &request.name, request.duration_hours)
        .await?;

    Ok((StatusCode::OK, Json(patch_type)))
}

/// Delete a custom patch type that has never been applied
#[utoipa::path(
    delete,
    path = "/api/patch-types/{id}",
    tag = PATCH_TYPE_TAG,
    params(("id" = i32, Path, description = "Patch type ID")),
    responses(
        (status = 204, description = "Patch type deleted"),
        (status = 403, description = "Built-in patch types cannot be deleted", body = ErrorDto),
        (status = 404, description = "Patch type not found", body = ErrorDto),
        (status = 409, description = "Patch type has recorded applications", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_patch_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PatchTypeService::new(&state.db)
        .delete_patch_type(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Enable or disable a patch type
#[utoipa::path(
    put,
    path = "/api/patch-types/{id}/enabled",
    tag = PATCH_TYPE_TAG,
    params(("id" = i32, Path, description = "Patch type ID")),
    request_body = SetEnabledDto,
    responses(
        (status = 200, description = "Patch type updated", body = PatchTypeDto),
        (status = 404, description = "Patch type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_patch_type_enabled(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<SetEnabledDto>,
) -> Result<impl IntoResponse, Error> {
    let patch_type = PatchTypeService::new(&state.db)
        .set_enabled(id, request.enabled)
        .await?;

    Ok((StatusCode::OK, Json(patch_type)))
}
