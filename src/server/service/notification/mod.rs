//! Reminder notifications.
//!
//! A scan turns the current state of worn patches and inventory into notification payloads.
//! The scan itself is stateless; [`tracker::NotificationTracker`] remembers which tags already
//! fired so the periodic job does not repeat itself.

pub mod tracker;

#[cfg(test)]
mod tests;

use chrono::{Duration, NaiveDateTime};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        inventory::InventoryAlertDto,
        notification::{NotificationDto, NotificationKind},
    },
    server::{
        config::NotificationSettings,
        error::Error,
        service::{inventory::InventoryService, patch::PatchService},
        util::lifecycle::{is_notification_due, ActivePatch},
    },
};

/// Icon shown alongside every notification
pub const NOTIFICATION_ICON: &str = "/assets/icons/patch-192.png";

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a NotificationSettings,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection, settings: &'a NotificationSettings) -> Self {
        Self { db, settings }
    }

    /// Builds every notification that applies at `now`
    ///
    /// Patch reminders come first in change order, followed by stock warnings in patch type
    /// order. Every returned notification has a distinct tag.
    pub async fn get_due_notifications(
        &self,
        now: NaiveDateTime,
    ) -> Result<Vec<NotificationDto>, Error> {
        let active_patches = PatchService::new(self.db).get_active_patches(now).await?;
        let inventory_alerts = InventoryService::new(self.db)
            .get_alerts(self.settings.low_inventory_threshold)
            .await?;

        Ok(build_notifications(
            &active_patches,
            &inventory_alerts,
            self.settings.notify_before_hours,
            now,
        ))
    }
}

/// Builds notification payloads from already computed patch & stock state.
pub fn build_notifications(
    active_patches: &[ActivePatch],
    inventory_alerts: &[InventoryAlertDto],
    notify_before_hours: f64,
    now: NaiveDateTime,
) -> Vec<NotificationDto> {
    let mut notifications = Vec::new();

    for patch in active_patches {
        if is_notification_due(patch, notify_before_hours, now) {
            notifications.push(patch_notification(
                patch,
                NotificationKind::ChangeSoon,
                "Patch change due soon",
                format!(
                    "Your {} patch on the {} is due to be changed in {}.",
                    patch.patch_type.name,
                    patch.application.location.to_lowercase(),
                    format_duration(patch.change_at - now)
                ),
            ));
        } else if patch.change_at <= now {
            notifications.push(patch_notification(
                patch,
                NotificationKind::Overdue,
                "Patch change overdue",
                format!(
                    "Your {} patch on the {} should have been changed {} ago.",
                    patch.patch_type.name,
                    patch.application.location.to_lowercase(),
                    format_duration(now - patch.change_at)
                ),
            ));
        }
    }

    for alert in inventory_alerts {
        let (kind, title, body) = if alert.is_out {
            (
                NotificationKind::OutOfStock,
                "Out of patches",
                format!("You have no {} patches left.", alert.patch_type_name),
            )
        } else if alert.is_low {
            (
                NotificationKind::LowStock,
                "Running low on patches",
                format!(
                    "Only {} {} patch{} left.",
                    alert.count,
                    alert.patch_type_name,
                    if alert.count == 1 { "" } else { "es" }
                ),
            )
        } else {
            continue;
        };

        notifications.push(NotificationDto {
            kind,
            title: title.to_string(),
            body,
            tag: format!("inventory-{}-{}", alert.patch_type_id, kind.as_str()),
            icon: NOTIFICATION_ICON.to_string(),
        });
    }

    notifications
}

fn patch_notification(
    patch: &ActivePatch,
    kind: NotificationKind,
    title: &str,
    body: String,
) -> NotificationDto {
    NotificationDto {
        kind,
        title: title.to_string(),
        body,
        tag: format!("patch-{}-{}", patch.application.id, kind.as_str()),
        icon: NOTIFICATION_ICON.to_string(),
    }
}

/// Formats a duration as hours and minutes, e.g. `1h 05m` or `45m`
fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
