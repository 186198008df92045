//! Pages and their ordering.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Top-level fields of a page write
///
/// `None` leaves the stored value untouched on update.
#[derive(Clone, Debug, Default)]
pub struct PageChanges {
    /// New title
    pub title: Option<String>,
    /// New slug, checked for uniqueness by the caller
    pub slug: Option<String>,
    /// `Some(None)` clears the description
    pub seo_description: Option<Option<String>>,
    /// New hidden flag
    pub is_hidden: Option<bool>,
}

/// Queries and writes on `folio_page`
pub struct PageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PageRepository<'a, C> {
    /// Creates a new instance of [`PageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a page at `order_index` with version 1
    pub async fn create(
        &self,
        artist_id: &str,
        title: String,
        slug: String,
        seo_description: Option<String>,
        is_hidden: bool,
        order_index: i32,
    ) -> Result<entity::folio_page::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let page = entity::folio_page::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            artist_id: ActiveValue::Set(artist_id.to_string()),
            title: ActiveValue::Set(title),
            slug: ActiveValue::Set(slug),
            seo_description: ActiveValue::Set(seo_description),
            is_hidden: ActiveValue::Set(is_hidden),
            order_index: ActiveValue::Set(order_index),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        page.insert(self.db).await
    }

    /// Applies `changes`, bumps the version, and touches `updated_at`
    pub async fn update(
        &self,
        page: entity::folio_page::Model,
        changes: PageChanges,
    ) -> Result<entity::folio_page::Model, DbErr> {
        let version = page.version + 1;
        let mut page_am = page.into_active_model();

        if let Some(title) = changes.title {
            page_am.title = ActiveValue::Set(title);
        }
        if let Some(slug) = changes.slug {
            page_am.slug = ActiveValue::Set(slug);
        }
        if let Some(seo_description) = changes.seo_description {
            page_am.seo_description = ActiveValue::Set(seo_description);
        }
        if let Some(is_hidden) = changes.is_hidden {
            page_am.is_hidden = ActiveValue::Set(is_hidden);
        }

        page_am.version = ActiveValue::Set(version);
        page_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        page_am.update(self.db).await
    }

    /// Pages of an artist by order index, optionally restricted to a hidden flag
    pub async fn find_by_artist(
        &self,
        artist_id: &str,
        is_hidden: Option<bool>,
    ) -> Result<Vec<entity::folio_page::Model>, DbErr> {
        let mut query = entity::prelude::FolioPage::find()
            .filter(entity::folio_page::Column::ArtistId.eq(artist_id));

        if let Some(is_hidden) = is_hidden {
            query = query.filter(entity::folio_page::Column::IsHidden.eq(is_hidden));
        }

        query
            .order_by_asc(entity::folio_page::Column::OrderIndex)
            .all(self.db)
            .await
    }

    /// Page by id, whichever artist owns it
    pub async fn find_by_id(&self, page_id: &str) -> Result<Option<entity::folio_page::Model>, DbErr> {
        entity::prelude::FolioPage::find_by_id(page_id.to_string())
            .one(self.db)
            .await
    }

    /// Page by id, only when owned by `artist_id`
    pub async fn find_one(
        &self,
        artist_id: &str,
        page_id: &str,
    ) -> Result<Option<entity::folio_page::Model>, DbErr> {
        entity::prelude::FolioPage::find_by_id(page_id.to_string())
            .filter(entity::folio_page::Column::ArtistId.eq(artist_id))
            .one(self.db)
            .await
    }

    /// Number of pages owned by an artist
    pub async fn count_by_artist(&self, artist_id: &str) -> Result<u64, DbErr> {
        entity::prelude::FolioPage::find()
            .filter(entity::folio_page::Column::ArtistId.eq(artist_id))
            .count(self.db)
            .await
    }

    /// Page counts for several artists in one grouped query
    ///
    /// Artists without pages are absent from the result.
    pub async fn count_by_artists(
        &self,
        artist_ids: &[String],
    ) -> Result<HashMap<String, u64>, DbErr> {
        if artist_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(String, i64)> = entity::prelude::FolioPage::find()
            .select_only()
            .column(entity::folio_page::Column::ArtistId)
            .column_as(entity::folio_page::Column::Id.count(), "page_count")
            .filter(entity::folio_page::Column::ArtistId.is_in(artist_ids.iter().cloned()))
            .group_by(entity::folio_page::Column::ArtistId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(artist_id, count)| (artist_id, count.max(0) as u64))
            .collect())
    }

    /// Whether another page of the artist already uses `slug`
    pub async fn slug_taken(
        &self,
        artist_id: &str,
        slug: &str,
        excluding_page_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::FolioPage::find()
            .filter(entity::folio_page::Column::ArtistId.eq(artist_id))
            .filter(entity::folio_page::Column::Slug.eq(slug));

        if let Some(page_id) = excluding_page_id {
            query = query.filter(entity::folio_page::Column::Id.ne(page_id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    mod find_by_artist {
        use folio_test_utils::prelude::*;

        use crate::server::data::page::PageRepository;

        async fn setup() -> Result<TestContext, TestError> {
            TestBuilder::new()
                .with_folio_tables()
                .with_account("account-1", "user-1", "pro")
                .with_artist("artist-1", "account-1", "camille")
                .with_page("page-home", "artist-1", "accueil", false)
                .with_page("page-draft", "artist-1", "brouillon", true)
                .with_page("page-gallery", "artist-1", "galerie", false)
                .build()
                .await
        }

        /// Expect pages ordered by order index
        #[tokio::test]
        async fn orders_pages() -> Result<(), TestError> {
            let test = setup().await?;

            let pages = PageRepository::new(&test.db)
                .find_by_artist("artist-1", None)
                .await?;

            let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["page-home", "page-draft", "page-gallery"]);

            Ok(())
        }

        /// Expect the hidden filter to select drafts only
        #[tokio::test]
        async fn filters_hidden_pages() -> Result<(), TestError> {
            let test = setup().await?;

            let pages = PageRepository::new(&test.db)
                .find_by_artist("artist-1", Some(true))
                .await?;

            assert_eq!(pages.len(), 1);
            assert_eq!(pages[0].id, "page-draft");

            Ok(())
        }
    }

    mod count_by_artists {
        use folio_test_utils::prelude::*;

        use crate::server::data::page::PageRepository;

        /// Expect one count per artist that has pages
        #[tokio::test]
        async fn counts_pages_per_artist() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_folio_tables()
                .with_account("account-1", "user-1", "pro")
                .with_artist("artist-1", "account-1", "camille")
                .with_artist("artist-2", "account-1", "nina")
                .with_artist("artist-3", "account-1", "solene")
                .with_page("page-1", "artist-1", "accueil", false)
                .with_page("page-2", "artist-1", "galerie", true)
                .with_page("page-3", "artist-2", "accueil", false)
                .build()
                .await?;

            let counts = PageRepository::new(&test.db)
                .count_by_artists(&[
                    "artist-1".to_string(),
                    "artist-2".to_string(),
                    "artist-3".to_string(),
                ])
                .await?;

            assert_eq!(counts.len(), 2);
            assert_eq!(counts.get("artist-1"), Some(&2));
            assert_eq!(counts.get("artist-2"), Some(&1));
            assert_eq!(counts.get("artist-3"), None);

            Ok(())
        }
    }

    mod update {
        use folio_test_utils::prelude::*;

        use crate::server::data::page::{PageChanges, PageRepository};

        /// Expect supplied fields to change and the version to increase
        #[tokio::test]
        async fn applies_changes_and_bumps_version() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_folio_tables()
                .with_account("account-1", "user-1", "pro")
                .with_artist("artist-1", "account-1", "camille")
                .with_page("page-1", "artist-1", "accueil", false)
                .build()
                .await?;
            let repo = PageRepository::new(&test.db);
            let page = repo.find_one("artist-1", "page-1").await?.unwrap();

            let updated = repo
                .update(
                    page,
                    PageChanges {
                        title: Some("Nouvelle série".to_string()),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(updated.title, "Nouvelle série");
            assert_eq!(updated.slug, "accueil");
            assert_eq!(updated.version, 2);

            Ok(())
        }
    }

    mod slug_taken {
        use folio_test_utils::prelude::*;

        use crate::server::data::page::PageRepository;

        /// Expect a conflict only with other pages of the same artist
        #[tokio::test]
        async fn scopes_conflicts_to_artist() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_folio_tables()
                .with_account("account-1", "user-1", "pro")
                .with_artist("artist-1", "account-1", "camille")
                .with_artist("artist-2", "account-1", "nina")
                .with_page("page-1", "artist-1", "galerie", false)
                .build()
                .await?;
            let repo = PageRepository::new(&test.db);

            assert!(repo.slug_taken("artist-1", "galerie", None).await?);
            assert!(!repo.slug_taken("artist-1", "galerie", Some("page-1")).await?);
            assert!(!repo.slug_taken("artist-2", "galerie", None).await?);

            Ok(())
        }
    }
}
