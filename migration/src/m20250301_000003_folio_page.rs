use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_folio_artist::FolioArtist;

static IDX_PAGE_ARTIST_SLUG: &str = "idx-folio_page-artist_id-slug";
static FK_PAGE_ARTIST_ID: &str = "fk-folio_page-artist_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FolioPage::Table)
                    .if_not_exists()
                    .col(string(FolioPage::Id).primary_key())
                    .col(string(FolioPage::ArtistId))
                    .col(string(FolioPage::Title))
                    .col(string(FolioPage::Slug))
                    .col(string_null(FolioPage::SeoDescription))
                    .col(boolean(FolioPage::IsHidden).default(false))
                    .col(integer(FolioPage::OrderIndex))
                    .col(integer(FolioPage::Version).default(1))
                    .col(timestamp(FolioPage::CreatedAt))
                    .col(timestamp(FolioPage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Slugs are unique per artist, not globally
        manager
            .create_index(
                Index::create()
                    .name(IDX_PAGE_ARTIST_SLUG)
                    .table(FolioPage::Table)
                    .col(FolioPage::ArtistId)
                    .col(FolioPage::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAGE_ARTIST_ID)
                    .from_tbl(FolioPage::Table)
                    .from_col(FolioPage::ArtistId)
                    .to_tbl(FolioArtist::Table)
                    .to_col(FolioArtist::Id)
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
                    .name(FK_PAGE_ARTIST_ID)
                    .table(FolioPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAGE_ARTIST_SLUG)
                    .table(FolioPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FolioPage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FolioPage {
    Table,
    Id,
    ArtistId,
    Title,
    Slug,
    SeoDescription,
    IsHidden,
    OrderIndex,
    Version,
    CreatedAt,
    UpdatedAt,
}
