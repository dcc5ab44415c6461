use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Problems found while reading settings from the environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed or is out of range, e.g. a negative
    /// `LOW_INVENTORY_THRESHOLD`.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Configuration problems are never the client's fault, they are reported as a 500.
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
