pub mod prelude;

pub mod inventory_entry;
pub mod patch_application;
pub mod patch_type;
