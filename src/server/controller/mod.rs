//! HTTP controller endpoints for the Patchkeeper API.
//!
//! Controllers extract request data, delegate to the service layer, and map results to JSON
//! responses. Errors are returned as [`crate::server::error::Error`] which converts itself into
//! the matching status code. Every handler is annotated for the OpenAPI document.

pub mod inventory;
pub mod notification;
pub mod patch;
pub mod patch_type;
