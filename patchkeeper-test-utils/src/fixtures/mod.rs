//! Fixture helpers.
//!
//! `patch` inserts records into the test database, `factory` builds in-memory models for
//! tests that never touch the database.

pub mod factory;
pub mod patch;
