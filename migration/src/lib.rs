pub use sea_orm_migration::prelude::*;

mod m20261019_000001_patch_type;
mod m20261019_000002_inventory_entry;
mod m20261019_000003_patch_application;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_patch_type::Migration),
            Box::new(m20261019_000002_inventory_entry::Migration),
            Box::new(m20261019_000003_patch_application::Migration),
        ]
    }
}
