use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "patch_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patch_type_id: i32,
    pub applied_at: DateTime,
    pub location: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patch_type::Entity",
        from = "Column::PatchTypeId",
        to = "super::patch_type::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    PatchType,
}

impl Related<super::patch_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatchType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
