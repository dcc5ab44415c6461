//! Factory functions for generating in-memory database models.
//!
//! These build model instances with standard test values without any database interaction,
//! suitable for unit tests of pure calculations.

use chrono::{Duration, NaiveDateTime, Utc};

/// Timestamp `hours` before now.
pub fn hours_ago(hours: i64) -> NaiveDateTime {
    Utc::now().naive_utc() - Duration::hours(hours)
}

/// Create an enabled built-in patch type model.
///
/// # Arguments
/// - `id` - Patch type ID
/// - `duration_hours` - Wear duration
pub fn mock_patch_type_model(id: i32, duration_hours: f64) -> entity::patch_type::Model {
    entity::patch_type::Model {
        id,
        name: format!("Test Patch {}", id),
        duration_hours,
        enabled: true,
        custom: false,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create an application model worn on the left abdomen without notes.
///
/// # Arguments
/// - `id` - Application ID
/// - `patch_type_id` - Referenced patch type ID
/// - `applied_at` - When the patch was applied
pub fn mock_application_model(
    id: i32,
    patch_type_id: i32,
    applied_at: NaiveDateTime,
) -> entity::patch_application::Model {
    entity::patch_application::Model {
        id,
        patch_type_id,
        applied_at,
        location: "Left abdomen".to_string(),
        notes: None,
    }
}

/// Create an inventory entry model.
pub fn mock_inventory_model(patch_type_id: i32, count: i32) -> entity::inventory_entry::Model {
    entity::inventory_entry::Model {
        id: patch_type_id,
        patch_type_id,
        count,
        updated_at: Utc::now().naive_utc(),
    }
}
