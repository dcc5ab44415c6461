use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_patch_type::PatchType;

static FK_INVENTORY_ENTRY_PATCH_TYPE_ID: &str = "fk_inventory_entry_patch_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryEntry::Id))
                    .col(integer_uniq(InventoryEntry::PatchTypeId))
                    .col(integer(InventoryEntry::Count))
                    .col(timestamp(InventoryEntry::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_ENTRY_PATCH_TYPE_ID)
                            .from(InventoryEntry::Table, InventoryEntry::PatchTypeId)
                            .to(PatchType::Table, PatchType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InventoryEntry {
    Table,
    Id,
    PatchTypeId,
    Count,
    UpdatedAt,
}
