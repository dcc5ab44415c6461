use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_patch_type::PatchType;

static IDX_PATCH_APPLICATION_PATCH_TYPE_ID: &str = "idx_patch_application_patch_type_id";
static FK_PATCH_APPLICATION_PATCH_TYPE_ID: &str = "fk_patch_application_patch_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign key is declared inline, SQLite cannot add constraints to existing tables
        manager
            .create_table(
                Table::create()
                    .table(PatchApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(PatchApplication::Id))
                    .col(integer(PatchApplication::PatchTypeId))
                    .col(timestamp(PatchApplication::AppliedAt))
                    .col(string(PatchApplication::Location))
                    .col(text_null(PatchApplication::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PATCH_APPLICATION_PATCH_TYPE_ID)
                            .from(PatchApplication::Table, PatchApplication::PatchTypeId)
                            .to(PatchType::Table, PatchType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PATCH_APPLICATION_PATCH_TYPE_ID)
                    .table(PatchApplication::Table)
                    .col(PatchApplication::PatchTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PATCH_APPLICATION_PATCH_TYPE_ID)
                    .table(PatchApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PatchApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PatchApplication {
    Table,
    Id,
    PatchTypeId,
    AppliedAt,
    Location,
    Notes,
}
