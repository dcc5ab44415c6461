//! Declarative test builder.
//!
//! `TestBuilder` queues table creation and fixture inserts, all of which run in the final
//! `build()` call.

use chrono::NaiveDateTime;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

struct PatchTypeFixture {
    name: String,
    duration_hours: f64,
    custom: bool,
    enabled: bool,
}

/// Builder for declarative test initialization.
///
/// Patch types are inserted in the order they are declared, so the first declared type has
/// ID 1, the second ID 2 and so on. The same holds for applications.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_patch_tables: bool,

    patch_types: Vec<PatchTypeFixture>,
    inventory: Vec<(i32, i32)>, // (patch_type_id, count)
    applications: Vec<(i32, NaiveDateTime, String)>, // (patch_type_id, applied_at, location)
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_patch_tables: false,
            patch_types: Vec::new(),
            inventory: Vec::new(),
            applications: Vec::new(),
        }
    }

    /// Add the patch type, inventory entry & patch application tables.
    pub fn with_patch_tables(mut self) -> Self {
        self.include_patch_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use patchkeeper_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), patchkeeper_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(PatchType)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an enabled built-in patch type.
    pub fn with_patch_type(self, name: &str, duration_hours: f64) -> Self {
        self.push_patch_type(name, duration_hours, false, true)
    }

    /// Insert an enabled custom patch type.
    pub fn with_custom_patch_type(self, name: &str, duration_hours: f64) -> Self {
        self.push_patch_type(name, duration_hours, true, true)
    }

    /// Insert a disabled built-in patch type.
    pub fn with_disabled_patch_type(self, name: &str, duration_hours: f64) -> Self {
        self.push_patch_type(name, duration_hours, false, false)
    }

    /// Set the stock count of a patch type declared earlier.
    pub fn with_inventory(mut self, patch_type_id: i32, count: i32) -> Self {
        self.inventory.push((patch_type_id, count));
        self
    }

    /// Record an application of a patch type declared earlier.
    pub fn with_application(
        mut self,
        patch_type_id: i32,
        applied_at: NaiveDateTime,
        location: &str,
    ) -> Self {
        self.applications
            .push((patch_type_id, applied_at, location.to_string()));
        self
    }

    fn push_patch_type(mut self, name: &str, duration_hours: f64, custom: bool, enabled: bool) -> Self {
        self.patch_types.push(PatchTypeFixture {
            name: name.to_string(),
            duration_hours,
            custom,
            enabled,
        });
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_patch_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PatchType),
                schema.create_table_from_entity(entity::prelude::InventoryEntry),
                schema.create_table_from_entity(entity::prelude::PatchApplication),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for fixture in self.patch_types {
            let model = setup
                .patch()
                .insert_patch_type(&fixture.name, fixture.duration_hours, fixture.custom)
                .await?;

            if !fixture.enabled {
                setup.patch().disable_patch_type(model.id).await?;
            }
        }

        for (patch_type_id, count) in self.inventory {
            setup.patch().insert_inventory(patch_type_id, count).await?;
        }

        for (patch_type_id, applied_at, location) in self.applications {
            setup
                .patch()
                .insert_application(patch_type_id, applied_at, &location)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
