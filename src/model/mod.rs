//! Data transfer objects shared by the HTTP API and its consumers.

pub mod api;
pub mod inventory;
pub mod notification;
pub mod patch;
