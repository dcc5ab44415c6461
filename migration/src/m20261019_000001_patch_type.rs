use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PatchType::Table)
                    .if_not_exists()
                    .col(pk_auto(PatchType::Id))
                    .col(string(PatchType::Name))
                    .col(double(PatchType::DurationHours))
                    .col(boolean(PatchType::Enabled))
                    .col(boolean(PatchType::Custom))
                    .col(timestamp(PatchType::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PatchType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PatchType {
    Table,
    Id,
    Name,
    DurationHours,
    Enabled,
    Custom,
    CreatedAt,
}
