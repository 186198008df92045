use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_folio_account::FolioAccount;

static IDX_ARTIST_ACCOUNT_ID: &str = "idx-folio_artist-account_id";
static FK_ARTIST_ACCOUNT_ID: &str = "fk-folio_artist-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FolioArtist::Table)
                    .if_not_exists()
                    .col(string(FolioArtist::Id).primary_key())
                    .col(string(FolioArtist::AccountId))
                    .col(string_uniq(FolioArtist::Slug))
                    .col(string(FolioArtist::DisplayName))
                    .col(string_null(FolioArtist::Tagline))
                    .col(string_null(FolioArtist::PlanId))
                    .col(string_null(FolioArtist::CustomDomain).unique_key())
                    .col(string_null(FolioArtist::Subdomain))
                    .col(json_null(FolioArtist::Theme))
                    .col(string_null(FolioArtist::AccentColor))
                    .col(string_null(FolioArtist::SeoDescription))
                    .col(json_null(FolioArtist::Navigation))
                    .col(big_integer_null(FolioArtist::StorageUsageMb))
                    .col(timestamp(FolioArtist::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIST_ACCOUNT_ID)
                    .table(FolioArtist::Table)
                    .col(FolioArtist::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIST_ACCOUNT_ID)
                    .from_tbl(FolioArtist::Table)
                    .from_col(FolioArtist::AccountId)
                    .to_tbl(FolioAccount::Table)
                    .to_col(FolioAccount::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTIST_ACCOUNT_ID)
                    .table(FolioArtist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ARTIST_ACCOUNT_ID)
                    .table(FolioArtist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FolioArtist::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FolioArtist {
    Table,
    Id,
    AccountId,
    Slug,
    DisplayName,
    Tagline,
    PlanId,
    CustomDomain,
    Subdomain,
    Theme,
    AccentColor,
    SeoDescription,
    Navigation,
    StorageUsageMb,
    CreatedAt,
}
