//! Service layer for business logic.
//!
//! Services validate requests, coordinate repositories, and wrap multi-step mutations in a single
//! database transaction so a failed step never leaves inventory and applications out of sync.

pub mod inventory;
pub mod notification;
pub mod patch;
pub mod patch_type;
