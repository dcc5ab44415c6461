use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use patchkeeper::{
    model::patch::{PatchTypeDto, PatchTypeRequestDto},
    server::controller::patch_type::{create_patch_type, get_patch_types},
};

use super::*;

fn request(name: &str, duration_hours: f64) -> Json<PatchTypeRequestDto> {
    Json(PatchTypeRequestDto {
        name: name.to_string(),
        duration_hours,
    })
}

/// Tests creating a custom patch type.
///
/// Expected: 201 Created with the new type marked as custom & enabled
#[tokio::test]
async fn creates_custom_patch_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let result = create_patch_type(State(test.into_app_state()), request("Every 4 days", 96.0)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let patch_type: PatchTypeDto = json_body(resp).await;
    assert_eq!(patch_type.name, "Every 4 days");
    assert_eq!(patch_type.duration_hours, 96.0);
    assert!(patch_type.custom);
    assert!(patch_type.enabled);

    Ok(())
}

/// Tests that a blank name is rejected.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let result = create_patch_type(State(test.into_app_state()), request("  ", 24.0)).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests that a non-positive duration is rejected.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_zero_duration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let result = create_patch_type(State(test.into_app_state()), request("Instant", 0.0)).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests listing built-in and custom patch types together.
///
/// Expected: 200 OK with every type in ID order
#[tokio::test]
async fn lists_all_patch_types() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_custom_patch_type("Every 4 days", 96.0)
        .with_disabled_patch_type("Daily", 24.0)
        .build()
        .await?;

    let result = get_patch_types(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let patch_types: Vec<PatchTypeDto> = json_body(resp).await;
    let names: Vec<&str> = patch_types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Weekly", "Every 4 days", "Daily"]);
    assert!(!patch_types[2].enabled);

    Ok(())
}
