//! Database fixtures for patch types, inventory entries & applications.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Fixture helper bound to a test database connection.
pub struct PatchFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatchFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an enabled patch type.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `duration_hours` - Wear duration
    /// - `custom` - Whether the type is user created
    pub async fn insert_patch_type(
        &self,
        name: &str,
        duration_hours: f64,
        custom: bool,
    ) -> Result<entity::patch_type::Model, DbErr> {
        entity::patch_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            duration_hours: ActiveValue::Set(duration_hours),
            enabled: ActiveValue::Set(true),
            custom: ActiveValue::Set(custom),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Mark an existing patch type as disabled.
    pub async fn disable_patch_type(&self, id: i32) -> Result<entity::patch_type::Model, DbErr> {
        entity::patch_type::ActiveModel {
            id: ActiveValue::Unchanged(id),
            enabled: ActiveValue::Set(false),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Insert the inventory entry of a patch type.
    pub async fn insert_inventory(
        &self,
        patch_type_id: i32,
        count: i32,
    ) -> Result<entity::inventory_entry::Model, DbErr> {
        entity::inventory_entry::ActiveModel {
            patch_type_id: ActiveValue::Set(patch_type_id),
            count: ActiveValue::Set(count),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Insert an application record without touching inventory.
    pub async fn insert_application(
        &self,
        patch_type_id: i32,
        applied_at: NaiveDateTime,
        location: &str,
    ) -> Result<entity::patch_application::Model, DbErr> {
        entity::patch_application::ActiveModel {
            patch_type_id: ActiveValue::Set(patch_type_id),
            applied_at: ActiveValue::Set(applied_at),
            location: ActiveValue::Set(location.to_string()),
            notes: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
