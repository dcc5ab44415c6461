use axum::{extract::State, http::StatusCode, response::IntoResponse};
use patchkeeper::{
    model::inventory::{InventoryAlertDto, InventoryDto},
    server::controller::inventory::{get_inventory, get_inventory_alerts},
};

use super::*;

/// Tests that disabled patch types are hidden and missing entries report zero.
///
/// Expected: 200 OK with only enabled types
#[tokio::test]
async fn lists_enabled_patch_types_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_disabled_patch_type("Daily", 24.0)
        .with_patch_type("Twice weekly", 84.0)
        .with_inventory(1, 6)
        .with_inventory(2, 4)
        .build()
        .await?;

    let result = get_inventory(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let inventory: Vec<InventoryDto> = json_body(resp).await;
    let counts: Vec<(i32, i32)> = inventory.iter().map(|i| (i.patch_type_id, i.count)).collect();
    assert_eq!(counts, vec![(1, 6), (3, 0)]);

    Ok(())
}

/// Tests low & out of stock alerts at the default threshold of 3.
///
/// Expected: 200 OK with out only for 0, low only for 2, nothing for 5
#[tokio::test]
async fn reports_low_and_out_of_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Daily", 24.0)
        .with_patch_type("Twice weekly", 84.0)
        .with_patch_type("Weekly", 168.0)
        .with_inventory(1, 0)
        .with_inventory(2, 2)
        .with_inventory(3, 5)
        .build()
        .await?;

    let result = get_inventory_alerts(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let alerts: Vec<InventoryAlertDto> = json_body(resp).await;
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].patch_type_id, 1);
    assert!(alerts[0].is_out && !alerts[0].is_low);
    assert_eq!(alerts[1].patch_type_id, 2);
    assert!(alerts[1].is_low && !alerts[1].is_out);

    Ok(())
}
