use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::{
    model::notification::NotificationDto,
    server::{
        config::NotificationSettings,
        error::Error,
        service::notification::{tracker::NotificationTracker, NotificationService},
    },
};

/// Runs one notification scan and delivers the alerts that have not fired yet.
///
/// Delivery is a structured log line per notification; the tag identifies the alert so
/// downstream consumers can replace rather than stack repeats.
///
/// # Returns
/// - `Ok(Vec<NotificationDto>)` - Notifications fired by this run, empty if nothing new is due
/// - `Err(Error)` - Failed to read patches or inventory
pub async fn dispatch_due_notifications(
    db: &DatabaseConnection,
    settings: &NotificationSettings,
    tracker: &Mutex<NotificationTracker>,
    now: NaiveDateTime,
) -> Result<Vec<NotificationDto>, Error> {
    // Held for the whole scan so runs apply their results in order
    let mut tracker = tracker.lock().await;

    let due = NotificationService::new(db, settings)
        .get_due_notifications(now)
        .await?;
    let fired = tracker.take_new(due, now);

    for notification in &fired {
        tracing::info!(
            tag = %notification.tag,
            kind = notification.kind.as_str(),
            "{}: {}",
            notification.title,
            notification.body
        );
    }

    Ok(fired)
}
