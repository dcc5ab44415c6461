use axum::http::{Method, StatusCode};
use patchkeeper::model::{inventory::InventoryAlertDto, patch::PatchTypeDto};

use super::*;

/// Expect the static alerts path to win over the patch type ID parameter
#[tokio::test]
async fn routes_inventory_alerts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Weekly", 168.0)
        .with_inventory(1, 1)
        .build()
        .await?;

    let resp = send(&test, Method::GET, "/api/inventory/alerts", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let alerts: Vec<InventoryAlertDto> = json_body(resp).await;
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].is_low);

    Ok(())
}

/// Expect GET & POST on the same path to reach their own handlers
#[tokio::test]
async fn routes_patch_types_by_method() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let created = send(
        &test,
        Method::POST,
        "/api/patch-types",
        Some(serde_json::json!({ "name": "Every 4 days", "duration_hours": 96.0 })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = send(&test, Method::GET, "/api/patch-types", None).await;
    assert_eq!(listed.status(), StatusCode::OK);
    let patch_types: Vec<PatchTypeDto> = json_body(listed).await;
    assert_eq!(patch_types.len(), 1);
    assert!(patch_types[0].custom);

    Ok(())
}

/// Expect a non-numeric ID to be rejected by the path extractor
#[tokio::test]
async fn rejects_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let resp = send(&test, Method::DELETE, "/api/patches/abc", None).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let resp = send(&test, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let document: serde_json::Value = json_body(resp).await;
    assert!(document["paths"]["/api/patches/{id}/unapply"]["post"].is_object());
    assert!(document["paths"]["/api/patch-types"]["get"].is_object());
    assert!(document["paths"]["/api/patch-types"]["post"].is_object());

    Ok(())
}
