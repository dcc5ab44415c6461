use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use patchkeeper::{
    model::{inventory::InventoryDto, patch::ActivePatchDto},
    server::controller::patch::{get_active_patches, remove_patch, unapply_patch},
};

use super::*;

async fn active_ids(test: &TestContext) -> Vec<i32> {
    let resp = get_active_patches(State(test.into_app_state()))
        .await
        .into_response();
    let active_patches: Vec<ActivePatchDto> = json_body(resp).await;

    active_patches.into_iter().map(|p| p.id).collect()
}

/// Tests unapplying returns exactly one unit and deletes the application.
///
/// Expected: 200 OK with the restored count
#[tokio::test]
async fn restores_one_unit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_inventory(1, 2)
        .with_application(1, factory::hours_ago(1), "Left thigh")
        .build()
        .await?;

    let result = unapply_patch(State(test.into_app_state()), Path(1)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let entry: InventoryDto = json_body(resp).await;
    assert_eq!(entry.count, 3);
    assert!(active_ids(&test).await.is_empty());

    Ok(())
}

/// Tests unapplying an application that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn rejects_unknown_application() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_inventory(1, 2)
        .build()
        .await?;

    let result = unapply_patch(State(test.into_app_state()), Path(5)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests removing a patch deletes only the application.
///
/// Expected: 204 No Content, then 404 on a second removal
#[tokio::test]
async fn removes_patch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_application(1, factory::hours_ago(1), "Left thigh")
        .with_application(1, factory::hours_ago(2), "Right thigh")
        .build()
        .await?;

    let result = remove_patch(State(test.into_app_state()), Path(1)).await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(active_ids(&test).await, vec![2]);

    let again = remove_patch(State(test.into_app_state()), Path(1)).await;
    assert_eq!(again.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
