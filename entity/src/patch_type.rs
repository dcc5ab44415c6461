use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "patch_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub duration_hours: f64,
    pub enabled: bool,
    pub custom: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::patch_application::Entity")]
    PatchApplication,
    #[sea_orm(has_one = "super::inventory_entry::Entity")]
    InventoryEntry,
}

impl Related<super::patch_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatchApplication.def()
    }
}

impl Related<super::inventory_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
