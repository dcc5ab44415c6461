use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use patchkeeper::{
    model::patch::{PatchTypeDto, PatchTypeRequestDto, SetEnabledDto},
    server::controller::patch_type::{set_patch_type_enabled, update_patch_type},
};

use super::*;

fn request(name: &str, duration_hours: f64) -> Json<PatchTypeRequestDto> {
    Json(PatchTypeRequestDto {
        name: name.to_string(),
        duration_hours,
    })
}

/// Tests editing a custom patch type.
///
/// Expected: 200 OK with the new name & duration
#[tokio::test]
async fn updates_custom_patch_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_custom_patch_type("Every 4 days", 96.0)
        .build()
        .await?;

    let result = update_patch_type(
        State(test.into_app_state()),
        Path(1),
        request("Every 5 days", 120.0),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let patch_type: PatchTypeDto = json_body(resp).await;
    assert_eq!(patch_type.name, "Every 5 days");
    assert_eq!(patch_type.duration_hours, 120.0);

    Ok(())
}

/// Tests that built-in patch types cannot be edited.
///
/// Expected: 403 Forbidden
#[tokio::test]
async fn rejects_built_in_patch_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .build()
        .await?;

    let result = update_patch_type(State(test.into_app_state()), Path(1), request("Monthly", 720.0)).await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests editing a patch type that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn rejects_unknown_patch_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let result = update_patch_type(State(test.into_app_state()), Path(9), request("Monthly", 720.0)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that built-in patch types can still be disabled.
///
/// Expected: 200 OK with enabled set to false
#[tokio::test]
async fn disables_built_in_patch_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .build()
        .await?;

    let result = set_patch_type_enabled(
        State(test.into_app_state()),
        Path(1),
        Json(SetEnabledDto { enabled: false }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let patch_type: PatchTypeDto = json_body(resp).await;
    assert!(!patch_type.enabled);

    Ok(())
}
