use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FolioAccount::Table)
                    .if_not_exists()
                    .col(string(FolioAccount::Id).primary_key())
                    .col(string_uniq(FolioAccount::OwnerUserId))
                    .col(string(FolioAccount::Name))
                    .col(string(FolioAccount::PlanId))
                    .col(string(FolioAccount::Status))
                    .col(big_integer_null(FolioAccount::StorageUsageMb))
                    .col(timestamp(FolioAccount::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FolioAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FolioAccount {
    Table,
    Id,
    OwnerUserId,
    Name,
    PlanId,
    Status,
    StorageUsageMb,
    CreatedAt,
}
