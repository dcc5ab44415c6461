//! Utility functions and helpers.
//!
//! Pure calculations over patch records: the change schedule of worn patches, stock
//! warnings, and body location rotation.

pub mod lifecycle;
pub mod location;
