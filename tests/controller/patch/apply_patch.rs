use axum::{extract::State, http::StatusCode, response::IntoResponse};
use patchkeeper::{
    model::{inventory::InventoryDto, patch::ActivePatchDto},
    server::controller::{inventory::get_inventory, patch::apply_patch},
};

use super::*;

async fn stock(test: &TestContext) -> Vec<i32> {
    let resp = get_inventory(State(test.into_app_state())).await.into_response();
    let inventory: Vec<InventoryDto> = json_body(resp).await;

    inventory.into_iter().map(|entry| entry.count).collect()
}

/// Tests applying a patch with stock available.
///
/// Expected: 201 Created, a fresh schedule, and one unit less in stock
#[tokio::test]
async fn applies_patch_and_decrements_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Twice weekly", 84.0)
        .with_inventory(1, 3)
        .build()
        .await?;

    let result = apply_patch(State(test.into_app_state()), apply_request(1, "Right buttock")).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let active_patch: ActivePatchDto = json_body(resp).await;
    assert_eq!(active_patch.location, "Right buttock");
    assert_eq!(active_patch.patch_type.id, 1);
    assert!(!active_patch.is_expired);
    assert!((84 * 3600 - 1..=84 * 3600).contains(&active_patch.time_remaining_secs));
    assert_eq!(stock(&test).await, vec![2]);

    Ok(())
}

/// Tests applying a patch with no stock left.
///
/// Expected: 409 Conflict with inventory unchanged
#[tokio::test]
async fn rejects_when_out_of_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_inventory(1, 0)
        .build()
        .await?;

    let result = apply_patch(State(test.into_app_state()), apply_request(1, "Left thigh")).await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);
    assert_eq!(stock(&test).await, vec![0]);

    Ok(())
}

/// Tests applying a patch of an unknown type.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn rejects_unknown_patch_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let result = apply_patch(State(test.into_app_state()), apply_request(3, "Left thigh")).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests applying a patch without a body location.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_blank_location() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_inventory(1, 5)
        .build()
        .await?;

    let result = apply_patch(State(test.into_app_state()), apply_request(1, " ")).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(stock(&test).await, vec![5]);

    Ok(())
}
