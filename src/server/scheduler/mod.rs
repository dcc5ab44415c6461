//! Scheduler for the periodic notification scan.
//!
//! A single cron job re-runs the due-notification scan. The job owns the
//! [`NotificationTracker`] behind a mutex so overlapping runs are serialised and every tag
//! fires once per occurrence of its condition.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::NotificationSettings, error::Error,
    service::notification::tracker::NotificationTracker,
};

pub mod config;
pub mod notification;

#[cfg(test)]
mod tests;

use self::notification::dispatch_due_notifications;

/// Job scheduler for background reminder scans.
pub struct Scheduler {
    db: DatabaseConnection,
    settings: NotificationSettings,
    tracker: Arc<Mutex<NotificationTracker>>,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `db` - Database connection used by every scan
    /// - `settings` - Reminder window & low stock threshold
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection, settings: NotificationSettings) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self {
            db,
            settings,
            tracker: Arc::new(Mutex::new(NotificationTracker::new())),
            sched,
        })
    }

    /// Registers the notification scan and starts the scheduler.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with a seconds field (e.g. `"0 * * * * *"` for every minute)
    ///
    /// # Returns
    /// - `Ok(())` - Job registered and scheduler started
    /// - `Err(Error)` - Invalid cron expression or scheduler failure
    pub async fn start(&mut self, cron: &str) -> Result<(), Error> {
        let db = self.db.clone();
        let settings = self.settings.clone();
        let tracker = Arc::clone(&self.tracker);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let settings = settings.clone();
                let tracker = Arc::clone(&tracker);

                Box::pin(async move {
                    let now = chrono::Utc::now().naive_utc();

                    match dispatch_due_notifications(&db, &settings, &tracker, now).await {
                        Ok(fired) => {
                            tracing::debug!("Notification scan fired {} notification(s)", fired.len())
                        }
                        Err(e) => tracing::error!("Error running notification scan: {:?}", e),
                    }
                })
            })?)
            .await?;

        self.sched.start().await?;

        tracing::info!(cron = cron, "Notification scheduler started");

        Ok(())
    }

    /// Stops the scheduler; no further scans run after this returns.
    pub async fn shutdown(&mut self) -> Result<(), Error> {
        self.sched.shutdown().await?;

        tracing::info!("Notification scheduler stopped");

        Ok(())
    }
}
