use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum PatchError {
    #[error("No patches of type ID {0} left in stock")]
    NoStock(i32),
    #[error("Patch type ID {0} not found")]
    PatchTypeNotFound(i32),
    #[error("Patch type ID {0} is built-in and cannot be edited or deleted")]
    PatchTypeNotCustom(i32),
    #[error("Patch type ID {0} has application history and cannot be deleted")]
    PatchTypeInUse(i32),
    #[error("Patch type ID {0} is disabled")]
    PatchTypeDisabled(i32),
    #[error("Patch application ID {0} not found")]
    ApplicationNotFound(i32),
    #[error("Invalid patch type: {0}")]
    InvalidPatchType(String),
    #[error("Invalid patch application: {0}")]
    InvalidApplication(String),
    #[error("Invalid inventory count: {0}")]
    InvalidInventoryCount(i32),
}

impl PatchError {
    fn status(&self) -> StatusCode {
        match self {
            Self::PatchTypeNotFound(_) | Self::ApplicationNotFound(_) => StatusCode::NOT_FOUND,
            Self::PatchTypeNotCustom(_) => StatusCode::FORBIDDEN,
            Self::NoStock(_) | Self::PatchTypeInUse(_) => StatusCode::CONFLICT,
            Self::PatchTypeDisabled(_)
            | Self::InvalidPatchType(_)
            | Self::InvalidApplication(_)
            | Self::InvalidInventoryCount(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for PatchError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
