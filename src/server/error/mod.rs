//! Error types for the Patchkeeper server.
//!
//! Domain rejections live in [`PatchError`], configuration problems in [`ConfigError`]. Both
//! are aggregated with external library errors into [`Error`], which implements `IntoResponse`
//! so controllers can return it directly.

pub mod config;
pub mod patch;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, patch::PatchError},
};

/// Main error type for the Patchkeeper server.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying errors convert through `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Rejected patch, patch type, or inventory operation.
    #[error(transparent)]
    PatchError(#[from] PatchError),
    /// Internal error indicating a bug in Patchkeeper's code.
    #[error("Internal error with Patchkeeper's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup or shutdown).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain rejections map to 4xx responses through [`PatchError`]; everything else is logged and
/// reported as a 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::PatchError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full message is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
