//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Type alias for the patch type database model.
///
/// # Fields (from `entity::patch_type::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `duration_hours` - Wear duration before a change is due
/// - `enabled` - Whether the type is offered when applying patches
/// - `custom` - User created types are custom, seeded types are built-in
/// - `created_at` - Timestamp when the type was created
pub type PatchTypeModel = entity::patch_type::Model;

/// Type alias for the patch application database model.
///
/// An application record exists for as long as the patch is being worn, removing or
/// unapplying the patch deletes it.
///
/// # Fields (from `entity::patch_application::Model`)
/// - `id` - Primary key, also defines insertion order
/// - `patch_type_id` - Foreign key to the applied patch type
/// - `applied_at` - When the patch was put on
/// - `location` - Body location of the patch
/// - `notes` - Optional free text
pub type PatchApplicationModel = entity::patch_application::Model;

/// Type alias for the inventory entry database model.
///
/// # Fields (from `entity::inventory_entry::Model`)
/// - `id` - Primary key
/// - `patch_type_id` - Unique foreign key to the stocked patch type
/// - `count` - Units in stock, never negative
/// - `updated_at` - Timestamp of the last stock change
pub type InventoryEntryModel = entity::inventory_entry::Model;
