//! Artist records and host lookup.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::util::host::first_label;

/// Values of a new artist row
pub struct NewArtist {
    /// Owning account
    pub account_id: String,
    /// Unique slug, also stored as the subdomain
    pub slug: String,
    /// Display name
    pub display_name: String,
    /// Optional tagline
    pub tagline: Option<String>,
    /// Plan override, `None` inherits the account plan
    pub plan_id: Option<String>,
    /// Theme tokens as JSON
    pub theme: Option<serde_json::Value>,
}

/// Queries and writes on `folio_artist`
pub struct ArtistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArtistRepository<'a, C> {
    /// Creates a new instance of [`ArtistRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an artist with a fresh id
    pub async fn create(&self, artist: NewArtist) -> Result<entity::folio_artist::Model, DbErr> {
        let artist = entity::folio_artist::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            account_id: ActiveValue::Set(artist.account_id),
            subdomain: ActiveValue::Set(Some(artist.slug.clone())),
            slug: ActiveValue::Set(artist.slug),
            display_name: ActiveValue::Set(artist.display_name),
            tagline: ActiveValue::Set(artist.tagline),
            plan_id: ActiveValue::Set(artist.plan_id),
            custom_domain: ActiveValue::Set(None),
            theme: ActiveValue::Set(artist.theme),
            accent_color: ActiveValue::Set(None),
            seo_description: ActiveValue::Set(None),
            navigation: ActiveValue::Set(None),
            storage_usage_mb: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        artist.insert(self.db).await
    }

    /// All artists, newest first
    pub async fn find_all(&self) -> Result<Vec<entity::folio_artist::Model>, DbErr> {
        entity::prelude::FolioArtist::find()
            .order_by_desc(entity::folio_artist::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Finds an artist by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::folio_artist::Model>, DbErr> {
        entity::prelude::FolioArtist::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Finds an artist whose id or slug equals `identifier`
    pub async fn find_by_id_or_slug(
        &self,
        identifier: &str,
    ) -> Result<Option<entity::folio_artist::Model>, DbErr> {
        entity::prelude::FolioArtist::find()
            .filter(
                Condition::any()
                    .add(entity::folio_artist::Column::Id.eq(identifier))
                    .add(entity::folio_artist::Column::Slug.eq(identifier)),
            )
            .one(self.db)
            .await
    }

    /// Finds the artist serving a normalized host
    ///
    /// Matches the custom domain against the whole host, and the subdomain or slug against its
    /// first label. A custom domain match wins over a label match.
    pub async fn find_by_host(&self, host: &str) -> Result<Option<entity::folio_artist::Model>, DbErr> {
        let label = first_label(host);

        let candidates = entity::prelude::FolioArtist::find()
            .filter(
                Condition::any()
                    .add(entity::folio_artist::Column::CustomDomain.eq(host))
                    .add(entity::folio_artist::Column::Subdomain.eq(label))
                    .add(entity::folio_artist::Column::Slug.eq(label)),
            )
            .order_by_asc(entity::folio_artist::Column::CreatedAt)
            .all(self.db)
            .await?;

        let exact = candidates
            .iter()
            .position(|artist| artist.custom_domain.as_deref() == Some(host));

        Ok(match exact {
            Some(index) => candidates.into_iter().nth(index),
            None => candidates.into_iter().next(),
        })
    }

    /// Artists of an account, oldest first
    pub async fn find_by_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<entity::folio_artist::Model>, DbErr> {
        entity::prelude::FolioArtist::find()
            .filter(entity::folio_artist::Column::AccountId.eq(account_id))
            .order_by_asc(entity::folio_artist::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Whether any artist uses `slug`
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FolioArtist::find()
            .filter(entity::folio_artist::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
