use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::artist::{ArtistDto, CreateArtistDto, NavigationItemDto, ThemeDto},
    server::{
        data::{
            account::AccountRepository,
            artist::{ArtistRepository, NewArtist},
        },
        error::{artist::ArtistError, Error},
        fixture::runtime::{artist_href, artists as fixture_artists, find_artist_by_id_or_slug},
        model::{
            db::ArtistModel,
            source::{FallbackCause, Sourced},
        },
        util::{
            slug::slugify,
            validation::{require_non_empty, require_slug},
        },
    },
};

/// Navigation entry as stored in the artist's `navigation` JSON column
#[derive(Deserialize)]
struct StoredNavigationItem {
    label: String,
    #[serde(default)]
    slug: Vec<String>,
    #[serde(default)]
    href: Option<String>,
}

/// Artist reads with fixture fallback, and artist creation
pub struct ArtistService<'a> {
    db: &'a DatabaseConnection,
    fixture_fallback: bool,
}

impl<'a> ArtistService<'a> {
    /// Creates a new instance of [`ArtistService`]
    pub fn new(db: &'a DatabaseConnection, fixture_fallback: bool) -> Self {
        Self {
            db,
            fixture_fallback,
        }
    }

    /// Lists artists newest first
    ///
    /// Demo artists are served only when the store fails; an empty store is a valid answer.
    pub async fn list(&self) -> Result<Sourced<Vec<ArtistDto>>, Error> {
        match ArtistRepository::new(self.db).find_all().await {
            Ok(artists) => Ok(Sourced::Live(artists.into_iter().map(artist_to_dto).collect())),
            Err(err) if self.fixture_fallback => {
                let cause = FallbackCause::from(&err);
                tracing::warn!(cause = %cause, "Serving demo artists");

                let artists = fixture_artists().iter().map(|a| a.to_artist_dto()).collect();
                Ok(Sourced::degraded(artists, cause))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Gets one artist by id or slug
    ///
    /// # Returns
    /// - `Ok(Sourced::Live)`: Artist found in the store
    /// - `Ok(Sourced::Degraded)`: Demo artist served in its place
    /// - `Err(Error::ArtistError(ArtistError::NotFound))`: Unknown everywhere
    pub async fn get(&self, identifier: &str) -> Result<Sourced<ArtistDto>, Error> {
        let lookup = ArtistRepository::new(self.db)
            .find_by_id_or_slug(identifier)
            .await;

        let error = match lookup {
            Ok(Some(artist)) => return Ok(Sourced::Live(artist_to_dto(artist))),
            Ok(None) => None,
            Err(err) => Some(err),
        };

        let fixture = FallbackCause::for_lookup(error, self.fixture_fallback)?
            .and_then(|cause| find_artist_by_id_or_slug(identifier).map(|a| (a, cause)));

        match fixture {
            Some((artist, cause)) => {
                tracing::warn!(artist = %identifier, cause = %cause, "Serving demo artist");
                Ok(Sourced::degraded(artist.to_artist_dto(), cause))
            }
            None => Err(ArtistError::NotFound(identifier.to_string()).into()),
        }
    }

    /// Creates an artist under an existing account
    ///
    /// The slug is derived from the display name when omitted and must be unused.
    pub async fn create(&self, artist: CreateArtistDto) -> Result<ArtistDto, Error> {
        require_non_empty("accountId", &artist.account_id)?;
        require_non_empty("displayName", &artist.display_name)?;

        let slug = match artist.slug {
            Some(slug) => slug.trim().to_string(),
            None => slugify(&artist.display_name),
        };
        require_slug(&slug)?;

        if AccountRepository::new(self.db)
            .find_by_id(&artist.account_id)
            .await?
            .is_none()
        {
            return Err(ArtistError::AccountNotFound(artist.account_id).into());
        }

        let artist_repo = ArtistRepository::new(self.db);
        if artist_repo.slug_exists(&slug).await? {
            return Err(ArtistError::SlugTaken(slug).into());
        }

        let theme = artist
            .theme
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| Error::ParseError(e.to_string()))?;

        let created = artist_repo
            .create(NewArtist {
                account_id: artist.account_id,
                slug,
                display_name: artist.display_name.trim().to_string(),
                tagline: artist.tagline,
                plan_id: artist.plan_id,
                theme,
            })
            .await?;

        tracing::info!(artist_id = %created.id, slug = %created.slug, "Artist created");

        Ok(artist_to_dto(created))
    }
}

pub(crate) fn artist_to_dto(artist: ArtistModel) -> ArtistDto {
    let theme = theme_from_json(artist.theme.as_ref());
    let navigation = navigation_from_json(&artist.slug, artist.navigation.as_ref());

    ArtistDto {
        id: artist.id,
        account_id: Some(artist.account_id),
        slug: artist.slug,
        display_name: artist.display_name,
        tagline: artist.tagline,
        plan_id: artist.plan_id,
        custom_domain: artist.custom_domain,
        subdomain: artist.subdomain,
        theme,
        accent_color: artist.accent_color,
        seo_description: artist.seo_description,
        navigation,
    }
}

/// Reads a stored theme, ignoring documents that lack a token.
pub(crate) fn theme_from_json(theme: Option<&serde_json::Value>) -> Option<ThemeDto> {
    theme.and_then(|value| serde_json::from_value(value.clone()).ok())
}

/// Reads stored navigation, filling in hrefs prefixed by the artist slug.
///
/// Malformed entries are skipped.
pub(crate) fn navigation_from_json(
    artist_slug: &str,
    navigation: Option<&serde_json::Value>,
) -> Vec<NavigationItemDto> {
    let Some(serde_json::Value::Array(items)) = navigation else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value::<StoredNavigationItem>(item.clone()).ok())
        .map(|item| NavigationItemDto {
            href: item
                .href
                .unwrap_or_else(|| artist_href(artist_slug, &item.slug)),
            label: item.label,
            slug: item.slug,
        })
        .collect()
}
