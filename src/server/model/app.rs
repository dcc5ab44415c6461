use sea_orm::DatabaseConnection;

use crate::server::config::NotificationSettings;

/// State handed to every HTTP handler.
///
/// Constructed once in `main` and cloned into the router.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: NotificationSettings,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings: NotificationSettings) -> Self {
        Self { db, settings }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, NotificationSettings::default())
    }
}
