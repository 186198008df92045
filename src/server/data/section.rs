//! Page sections.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::page::SectionInputDto;

/// Queries and writes on `folio_page_section`
pub struct SectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SectionRepository<'a, C> {
    /// Creates a new instance of [`SectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sections of a page by order index
    pub async fn find_by_page(
        &self,
        page_id: &str,
    ) -> Result<Vec<entity::folio_page_section::Model>, DbErr> {
        entity::prelude::FolioPageSection::find()
            .filter(entity::folio_page_section::Column::PageId.eq(page_id))
            .order_by_asc(entity::folio_page_section::Column::OrderIndex)
            .all(self.db)
            .await
    }

    /// Sections of several pages, ordered by page then order index
    pub async fn find_by_pages(
        &self,
        page_ids: &[String],
    ) -> Result<Vec<entity::folio_page_section::Model>, DbErr> {
        if page_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FolioPageSection::find()
            .filter(entity::folio_page_section::Column::PageId.is_in(page_ids.iter().cloned()))
            .order_by_asc(entity::folio_page_section::Column::PageId)
            .order_by_asc(entity::folio_page_section::Column::OrderIndex)
            .all(self.db)
            .await
    }

    /// Makes the page's sections exactly `sections`, in that order
    ///
    /// Entries whose id already belongs to the page are updated in place, other entries are
    /// inserted with a new id, and stored sections absent from the list are deleted. Order
    /// indexes are rewritten as 0..N-1. Run inside a transaction to keep the set consistent.
    pub async fn replace_for_page(
        &self,
        page_id: &str,
        sections: Vec<SectionInputDto>,
    ) -> Result<Vec<entity::folio_page_section::Model>, DbErr> {
        let existing: HashSet<String> = self
            .find_by_page(page_id)
            .await?
            .into_iter()
            .map(|section| section.id)
            .collect();

        // An id reused twice in one payload only keeps its identity the first time
        let mut kept: HashSet<String> = HashSet::new();
        let planned: Vec<(Option<String>, SectionInputDto)> = sections
            .into_iter()
            .map(|section| {
                let reuse = section
                    .id
                    .clone()
                    .filter(|id| existing.contains(id) && kept.insert(id.clone()));
                (reuse, section)
            })
            .collect();

        let mut stale = entity::prelude::FolioPageSection::delete_many()
            .filter(entity::folio_page_section::Column::PageId.eq(page_id));
        if !kept.is_empty() {
            stale = stale.filter(entity::folio_page_section::Column::Id.is_not_in(kept.iter().cloned()));
        }
        stale.exec(self.db).await?;

        let mut result = Vec::with_capacity(planned.len());

        for (index, (reuse, section)) in planned.into_iter().enumerate() {
            let data = section.data.unwrap_or_else(|| serde_json::json!({}));
            let is_visible = section.is_visible.unwrap_or(true);

            let model = match reuse {
                Some(id) => {
                    entity::folio_page_section::ActiveModel {
                        id: ActiveValue::Unchanged(id),
                        page_id: ActiveValue::Unchanged(page_id.to_string()),
                        section_type: ActiveValue::Set(section.section_type.to_string()),
                        data: ActiveValue::Set(data),
                        is_visible: ActiveValue::Set(is_visible),
                        order_index: ActiveValue::Set(index as i32),
                    }
                    .update(self.db)
                    .await?
                }
                None => {
                    entity::folio_page_section::ActiveModel {
                        id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                        page_id: ActiveValue::Set(page_id.to_string()),
                        section_type: ActiveValue::Set(section.section_type.to_string()),
                        data: ActiveValue::Set(data),
                        is_visible: ActiveValue::Set(is_visible),
                        order_index: ActiveValue::Set(index as i32),
                    }
                    .insert(self.db)
                    .await?
                }
            };

            result.push(model);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    mod replace_for_page {
        use folio_test_utils::prelude::*;

        use crate::{
            model::page::{SectionInputDto, SectionType},
            server::data::section::SectionRepository,
        };

        async fn setup() -> Result<TestContext, TestError> {
            let test = TestBuilder::new()
                .with_folio_tables()
                .with_account("account-1", "user-1", "pro")
                .with_artist("artist-1", "account-1", "camille")
                .with_page("page-1", "artist-1", "accueil", false)
                .build()
                .await?;

            test.folio().insert_section("section-hero", "page-1", "hero", 0).await?;
            test.folio().insert_section("section-quote", "page-1", "quote", 1).await?;
            test.folio().insert_section("section-cta", "page-1", "cta", 2).await?;

            Ok(test)
        }

        fn input(id: Option<&str>, section_type: SectionType) -> SectionInputDto {
            SectionInputDto {
                id: id.map(str::to_string),
                section_type,
                data: None,
                is_visible: None,
            }
        }

        /// Expect known ids to be kept, unknown ones inserted, and omitted ones deleted
        #[tokio::test]
        async fn upserts_by_id() -> Result<(), TestError> {
            let test = setup().await?;
            let repo = SectionRepository::new(&test.db);

            let result = repo
                .replace_for_page(
                    "page-1",
                    vec![
                        input(Some("section-cta"), SectionType::Cta),
                        input(None, SectionType::Gallery),
                        input(Some("section-hero"), SectionType::Hero),
                    ],
                )
                .await?;

            assert_eq!(result[0].id, "section-cta");
            assert_eq!(result[2].id, "section-hero");
            assert_ne!(result[1].id, "section-quote");

            let stored = repo.find_by_page("page-1").await?;
            let order: Vec<(String, i32)> = stored
                .into_iter()
                .map(|s| (s.section_type, s.order_index))
                .collect();
            assert_eq!(
                order,
                vec![
                    ("cta".to_string(), 0),
                    ("gallery".to_string(), 1),
                    ("hero".to_string(), 2)
                ]
            );

            Ok(())
        }

        /// Expect ids from another page to be treated as new sections
        #[tokio::test]
        async fn ignores_foreign_ids() -> Result<(), TestError> {
            let test = setup().await?;
            test.folio().insert_page("page-2", "artist-1", "galerie", 1, false).await?;
            test.folio().insert_section("foreign", "page-2", "hero", 0).await?;
            let repo = SectionRepository::new(&test.db);

            let result = repo
                .replace_for_page("page-1", vec![input(Some("foreign"), SectionType::Hero)])
                .await?;

            assert_ne!(result[0].id, "foreign");
            assert_eq!(repo.find_by_page("page-2").await?.len(), 1);

            Ok(())
        }

        /// Expect an empty list to clear the page
        #[tokio::test]
        async fn clears_sections() -> Result<(), TestError> {
            let test = setup().await?;
            let repo = SectionRepository::new(&test.db);

            let result = repo.replace_for_page("page-1", Vec::new()).await?;

            assert!(result.is_empty());
            assert!(repo.find_by_page("page-1").await?.is_empty());

            Ok(())
        }

        /// Expect defaults for omitted data and visibility
        #[tokio::test]
        async fn applies_defaults() -> Result<(), TestError> {
            let test = setup().await?;
            let repo = SectionRepository::new(&test.db);

            let result = repo
                .replace_for_page("page-1", vec![input(None, SectionType::Stats)])
                .await?;

            assert!(result[0].is_visible);
            assert_eq!(result[0].data, serde_json::json!({}));

            Ok(())
        }
    }
}
