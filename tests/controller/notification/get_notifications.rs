use axum::{extract::State, http::StatusCode, response::IntoResponse};
use patchkeeper::{
    model::notification::{NotificationDto, NotificationKind, SettingsDto},
    server::controller::notification::{get_notifications, get_settings},
};

use super::*;

/// Tests the stateless scan repeats due notifications on every call.
///
/// Expected: 200 OK with the same reminder twice
#[tokio::test]
async fn returns_due_notifications_on_every_call() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_patch_tables()
        .with_patch_type("Daily", 24.0)
        .with_inventory(1, 0)
        .with_application(1, factory::hours_ago(23), "Left thigh")
        .build()
        .await?;

    for _ in 0..2 {
        let resp = get_notifications(State(test.into_app_state()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let notifications: Vec<NotificationDto> = json_body(resp).await;
        let tags: Vec<&str> = notifications.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["patch-1-change-soon", "inventory-1-out-of-stock"]);
        assert_eq!(notifications[1].kind, NotificationKind::OutOfStock);
    }

    Ok(())
}

/// Tests the default notification settings are reported.
///
/// Expected: 200 OK with a 2 hour window and threshold of 3
#[tokio::test]
async fn reports_default_settings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_patch_tables().build().await?;

    let resp = get_settings(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let settings: SettingsDto = json_body(resp).await;
    assert_eq!(settings.notify_before_hours, 2.0);
    assert_eq!(settings.low_inventory_threshold, 3);

    Ok(())
}
