//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns a
//! connection to a fresh in-memory SQLite database.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{error::TestError, fixtures::patch::PatchFixtures};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_patch_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert fixtures after the build step
/// test.patch().insert_patch_type("Weekly", 168.0, false).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without a circular dependency between the
    /// test-utils crate and the main patchkeeper crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Access patch type, inventory & application fixture helpers
    pub fn patch(&self) -> PatchFixtures<'_> {
        PatchFixtures::new(&self.db)
    }
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements, executed in order
    pub(crate) async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
