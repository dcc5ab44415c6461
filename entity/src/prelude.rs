pub use super::inventory_entry::Entity as InventoryEntry;
pub use super::patch_application::Entity as PatchApplication;
pub use super::patch_type::Entity as PatchType;
