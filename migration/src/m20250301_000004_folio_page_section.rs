use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000003_folio_page::FolioPage;

static IDX_SECTION_PAGE_ID: &str = "idx-folio_page_section-page_id";
static FK_SECTION_PAGE_ID: &str = "fk-folio_page_section-page_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FolioPageSection::Table)
                    .if_not_exists()
                    .col(string(FolioPageSection::Id).primary_key())
                    .col(string(FolioPageSection::PageId))
                    .col(string(FolioPageSection::SectionType))
                    .col(json(FolioPageSection::Data))
                    .col(boolean(FolioPageSection::IsVisible).default(true))
                    .col(integer(FolioPageSection::OrderIndex))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SECTION_PAGE_ID)
                    .table(FolioPageSection::Table)
                    .col(FolioPageSection::PageId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SECTION_PAGE_ID)
                    .from_tbl(FolioPageSection::Table)
                    .from_col(FolioPageSection::PageId)
                    .to_tbl(FolioPage::Table)
                    .to_col(FolioPage::Id)
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
                    .name(FK_SECTION_PAGE_ID)
                    .table(FolioPageSection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SECTION_PAGE_ID)
                    .table(FolioPageSection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FolioPageSection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FolioPageSection {
    Table,
    Id,
    PageId,
    SectionType,
    Data,
    IsVisible,
    OrderIndex,
}
