use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub patch_type_id: i32,
    pub count: i32,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patch_type::Entity",
        from = "Column::PatchTypeId",
        to = "super::patch_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PatchType,
}

impl Related<super::patch_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatchType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
