//! Environment based application configuration.

use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::server::{error::config::ConfigError, scheduler::config::DEFAULT_CRON_EXPRESSION};

/// Default reminder window before a patch change is due.
pub const DEFAULT_NOTIFY_BEFORE_HOURS: f64 = 2.0;

/// Default stock count at or below which a patch type is reported as running low.
pub const DEFAULT_LOW_INVENTORY_THRESHOLD: i32 = 3;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Thresholds used when deciding which reminders are due.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationSettings {
    /// How many hours before a change is due the "change soon" reminder fires
    pub notify_before_hours: f64,
    /// Stock count at or below which a patch type counts as low
    pub low_inventory_threshold: i32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            notify_before_hours: DEFAULT_NOTIFY_BEFORE_HOURS,
            low_inventory_threshold: DEFAULT_LOW_INVENTORY_THRESHOLD,
        }
    }
}

/// Application configuration loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// sea-orm connection URL, e.g. `sqlite://patchkeeper.db?mode=rwc`
    pub database_url: String,
    /// Socket address the HTTP server listens on
    pub bind_address: String,
    /// Cron expression for the notification scan (with seconds field)
    pub notification_cron: String,
    /// Maximum level of log output
    pub log_level: Level,
    /// Reminder thresholds
    pub notifications: NotificationSettings,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed or is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` to resolve each variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let notification_cron =
            lookup("NOTIFICATION_CRON").unwrap_or_else(|| DEFAULT_CRON_EXPRESSION.to_string());

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => Level::from_str(&value).map_err(|e| ConfigError::InvalidEnvValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            })?,
            None => Level::INFO,
        };

        let notify_before_hours: f64 =
            parse_or_default(&lookup, "NOTIFY_BEFORE_HOURS", DEFAULT_NOTIFY_BEFORE_HOURS)?;
        if !notify_before_hours.is_finite() || notify_before_hours <= 0.0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "NOTIFY_BEFORE_HOURS".to_string(),
                reason: "must be a positive number of hours".to_string(),
            });
        }

        let low_inventory_threshold: i32 = parse_or_default(
            &lookup,
            "LOW_INVENTORY_THRESHOLD",
            DEFAULT_LOW_INVENTORY_THRESHOLD,
        )?;
        if low_inventory_threshold < 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "LOW_INVENTORY_THRESHOLD".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        Ok(Self {
            database_url,
            bind_address,
            notification_cron,
            log_level,
            notifications: NotificationSettings {
                notify_before_hours,
                low_inventory_threshold,
            },
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
