//! Public runtime of artist sites: tenant resolution, contact requests, and telemetry.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::StatusDto,
        plan::PlanDto,
        runtime::{
            ContactReceiptDto, RuntimeArtistDto, RuntimeContactDto, RuntimeEventDto,
            RuntimePageSummaryDto, RuntimeResolutionDto,
        },
    },
    server::{
        data::{account::AccountRepository, artist::ArtistRepository, page::PageRepository},
        error::{artist::ArtistError, runtime::RuntimeError, Error},
        fixture::runtime::{
            default_accent_color, default_theme, find_artist_by_host, find_artist_by_id_or_slug,
            FixtureArtist,
        },
        model::{
            db::ArtistModel,
            source::{FallbackCause, Sourced},
        },
        service::{
            artist::{navigation_from_json, theme_from_json},
            plan::find_plan,
        },
        util::{
            host::normalize_host,
            validation::{require_email, require_non_empty},
        },
    },
};

/// How long a resolution may be cached by the site renderer.
pub const RESOLUTION_TTL_SECONDS: u32 = 60;

/// Serves the public sites: host resolution plus contact and event intake
pub struct RuntimeService<'a> {
    db: &'a DatabaseConnection,
    fixture_fallback: bool,
}

impl<'a> RuntimeService<'a> {
    /// Creates a new instance of [`RuntimeService`]
    pub fn new(db: &'a DatabaseConnection, fixture_fallback: bool) -> Self {
        Self {
            db,
            fixture_fallback,
        }
    }

    /// Resolves the tenant serving `host`
    ///
    /// The store is tried first. When it fails or has no match, the demo tenants are matched by
    /// exact domain and then by first host label, and the result is flagged as degraded.
    ///
    /// # Returns
    /// - `Ok(Sourced::Live)`: Tenant found in the store
    /// - `Ok(Sourced::Degraded)`: Demo tenant served instead
    /// - `Err(Error::RuntimeError(RuntimeError::HostNotFound))`: No tenant for this host
    /// - `Err(Error::DbErr)`: Store failure with fallback disabled
    pub async fn resolve_host(&self, host: &str) -> Result<Sourced<RuntimeResolutionDto>, Error> {
        let normalized = normalize_host(host);

        let error = match self.resolve_from_store(&normalized).await {
            Ok(Some(resolution)) => return Ok(Sourced::Live(resolution)),
            Ok(None) => None,
            Err(err) => Some(err),
        };

        let Some(cause) = FallbackCause::for_lookup(error, self.fixture_fallback)? else {
            return Err(RuntimeError::HostNotFound(host.to_string()).into());
        };

        let Some(artist) = find_artist_by_host(&normalized) else {
            if let FallbackCause::StoreUnavailable(ref reason) = cause {
                tracing::warn!(host = %normalized, reason = %reason, "Host unresolved while store unavailable");
            }
            return Err(RuntimeError::HostNotFound(host.to_string()).into());
        };

        tracing::warn!(host = %normalized, artist = %artist.slug, cause = %cause, "Serving demo tenant");

        Ok(Sourced::degraded(fixture_resolution(artist), cause))
    }

    /// Accepts a visitor's contact request if the artist's plan allows it
    ///
    /// The artist's own plan applies, else its account's plan. Requests are only logged; the
    /// returned `queued` status is a label.
    pub async fn submit_contact(&self, contact: RuntimeContactDto) -> Result<ContactReceiptDto, Error> {
        require_non_empty("artistId", &contact.artist_id)?;
        require_non_empty("name", &contact.name)?;
        require_email(&contact.email)?;
        require_non_empty("message", &contact.message)?;

        let plan = self.plan_for_artist(&contact.artist_id).await?;

        if !plan.contact_enabled {
            return Err(RuntimeError::ContactDisabled.into());
        }

        tracing::info!(
            artist_id = %contact.artist_id,
            plan = %plan.id,
            "Contact request queued"
        );

        Ok(ContactReceiptDto {
            status: "queued".to_string(),
            message: "Votre message a bien été transmis à l’équipe de l’artiste.".to_string(),
        })
    }

    /// Records a telemetry event from an artist site
    pub fn record_event(&self, event: RuntimeEventDto) -> Result<StatusDto, Error> {
        require_non_empty("event", &event.event)?;

        tracing::debug!(event = %event.event, payload = ?event.payload, "Runtime event");

        Ok(StatusDto::new("recorded"))
    }

    async fn plan_for_artist(&self, identifier: &str) -> Result<PlanDto, Error> {
        let error = match ArtistRepository::new(self.db)
            .find_by_id_or_slug(identifier)
            .await
        {
            Ok(Some(artist)) => return Ok(self.effective_plan(&artist).await?),
            Ok(None) => None,
            Err(err) => Some(err),
        };

        let fixture = FallbackCause::for_lookup(error, self.fixture_fallback)?
            .and_then(|cause| find_artist_by_id_or_slug(identifier).map(|a| (a, cause)));

        match fixture {
            Some((artist, cause)) => {
                tracing::warn!(artist = %identifier, cause = %cause, "Using demo artist plan");
                Ok(find_plan(artist.plan_id))
            }
            None => Err(ArtistError::NotFound(identifier.to_string()).into()),
        }
    }

    /// The artist's plan, else its account's plan, else the free plan
    async fn effective_plan(&self, artist: &ArtistModel) -> Result<PlanDto, sea_orm::DbErr> {
        if let Some(plan_id) = &artist.plan_id {
            return Ok(find_plan(plan_id));
        }

        let account = AccountRepository::new(self.db)
            .find_by_id(&artist.account_id)
            .await?;

        Ok(find_plan(
            account.as_ref().map(|a| a.plan_id.as_str()).unwrap_or_default(),
        ))
    }

    async fn resolve_from_store(&self, host: &str) -> Result<Option<RuntimeResolutionDto>, sea_orm::DbErr> {
        let Some(artist) = ArtistRepository::new(self.db).find_by_host(host).await? else {
            return Ok(None);
        };

        let plan = self.effective_plan(&artist).await?;
        let pages = PageRepository::new(self.db)
            .find_by_artist(&artist.id, Some(false))
            .await?;

        let pages = pages
            .into_iter()
            .map(|page| RuntimePageSummaryDto {
                slug: [artist.slug.as_str(), page.slug.as_str()]
                    .into_iter()
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect(),
                id: page.id,
                title: page.title,
                updated_at: page.updated_at.and_utc(),
            })
            .collect();

        let navigation = navigation_from_json(&artist.slug, artist.navigation.as_ref());

        Ok(Some(RuntimeResolutionDto {
            artist: RuntimeArtistDto {
                theme: theme_from_json(artist.theme.as_ref()).unwrap_or_else(default_theme),
                accent_color: artist
                    .accent_color
                    .unwrap_or_else(|| default_accent_color().to_string()),
                tagline: artist.tagline.unwrap_or_default(),
                plan_id: plan.id.clone(),
                id: artist.id,
                slug: artist.slug,
                display_name: artist.display_name,
                seo_description: artist.seo_description,
            },
            navigation,
            plan,
            pages,
            ttl_seconds: RESOLUTION_TTL_SECONDS,
            degraded: false,
        }))
    }
}

fn fixture_resolution(artist: &FixtureArtist) -> RuntimeResolutionDto {
    let pages = artist
        .pages
        .iter()
        .filter(|page| !page.is_hidden())
        .map(|page| RuntimePageSummaryDto {
            id: page.id.to_string(),
            title: page.title.to_string(),
            slug: page.full_slug(artist.slug),
            updated_at: page.updated_at,
        })
        .collect();

    RuntimeResolutionDto {
        artist: RuntimeArtistDto {
            id: artist.id.to_string(),
            slug: artist.slug.to_string(),
            display_name: artist.display_name.to_string(),
            tagline: artist.tagline.to_string(),
            plan_id: artist.plan_id.to_string(),
            theme: artist.theme.clone(),
            accent_color: artist.accent_color.to_string(),
            seo_description: artist.seo_description.map(str::to_string),
        },
        navigation: artist.navigation_items(),
        plan: find_plan(artist.plan_id),
        pages,
        ttl_seconds: RESOLUTION_TTL_SECONDS,
        degraded: true,
    }
}
