//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for each table. They are generic over `ConnectionTrait` so
//! services can run them against a plain connection or inside a transaction.

pub mod inventory;
pub mod patch_application;
pub mod patch_type;
