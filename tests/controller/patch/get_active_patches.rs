use axum::{extract::State, http::StatusCode, response::IntoResponse};
use patchkeeper::{
    model::patch::{ActivePatchDto, LocationSuggestionDto},
    server::controller::patch::{get_active_patches, get_next_location},
};

use super::*;

/// Tests that worn patches are listed soonest change first.
///
/// Expected: 200 OK with the expired patch first
#[tokio::test]
async fn lists_soonest_change_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_patch_type("Daily", 24.0)
        .with_application(1, factory::hours_ago(10), "Left thigh")
        .with_application(2, factory::hours_ago(30), "Right thigh")
        .with_application(2, factory::hours_ago(20), "Left abdomen")
        .build()
        .await?;

    let result = get_active_patches(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let active_patches: Vec<ActivePatchDto> = json_body(resp).await;
    let ids: Vec<i32> = active_patches.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert!(active_patches[0].is_expired);
    assert!(active_patches[0].time_remaining_secs < 0);
    assert!(!active_patches[1].is_expired);

    Ok(())
}

/// Tests the location suggestion skips occupied sites.
///
/// Expected: 200 OK with the first unoccupied site
#[tokio::test]
async fn suggests_unoccupied_location() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_application(1, factory::hours_ago(10), "Left abdomen")
        .build()
        .await?;

    let result = get_next_location(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let suggestion: LocationSuggestionDto = json_body(resp).await;
    assert_eq!(suggestion.location, "Right abdomen");

    Ok(())
}
