use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::page::{
        ListPagesQuery, PageDto, PageStatus, PatchPageDto, SectionDto, UpsertPageDto,
    },
    server::{
        data::{
            artist::ArtistRepository,
            page::{PageChanges, PageRepository},
            section::SectionRepository,
        },
        error::{artist::ArtistError, page::PageError, Error},
        fixture::runtime::find_artist_by_id_or_slug,
        model::{
            db::{ArtistModel, PageModel, SectionModel},
            source::{FallbackCause, Sourced},
        },
        util::validation::{require_non_empty, require_slug},
    },
};

/// Page builder operations scoped to one artist
pub struct PageService<'a> {
    db: &'a DatabaseConnection,
    fixture_fallback: bool,
}

impl<'a> PageService<'a> {
    /// Creates a new instance of [`PageService`]
    pub fn new(db: &'a DatabaseConnection, fixture_fallback: bool) -> Self {
        Self {
            db,
            fixture_fallback,
        }
    }

    /// Lists an artist's pages by order index
    ///
    /// `status` filters on the hidden flag (draft is hidden). Demo pages are served when the
    /// store fails or does not know the artist.
    pub async fn list(
        &self,
        artist_id: &str,
        query: ListPagesQuery,
    ) -> Result<Sourced<Vec<PageDto>>, Error> {
        let include_sections = query.include_sections.unwrap_or(false);

        let error = match self
            .list_from_store(artist_id, query.status, include_sections)
            .await
        {
            Ok(Some(pages)) => return Ok(Sourced::Live(pages?)),
            Ok(None) => None,
            Err(err) => Some(err),
        };

        let fixture = FallbackCause::for_lookup(error, self.fixture_fallback)?
            .and_then(|cause| find_artist_by_id_or_slug(artist_id).map(|a| (a, cause)));

        let Some((artist, cause)) = fixture else {
            return Err(ArtistError::NotFound(artist_id.to_string()).into());
        };

        tracing::warn!(artist = %artist_id, cause = %cause, "Serving demo pages");

        let pages = artist
            .pages
            .iter()
            .enumerate()
            .filter(|(_, page)| query.status.is_none_or(|status| page.status == status))
            .map(|(index, page)| page.to_page_dto(artist, index, include_sections))
            .collect();

        Ok(Sourced::degraded(pages, cause))
    }

    /// Gets one page of an artist with its ordered sections
    pub async fn get(&self, artist_id: &str, page_id: &str) -> Result<Sourced<PageDto>, Error> {
        let error = match self.get_from_store(artist_id, page_id).await {
            Ok(Some(page)) => return Ok(Sourced::Live(page?)),
            Ok(None) => None,
            Err(err) => Some(err),
        };

        let fixture = FallbackCause::for_lookup(error, self.fixture_fallback)?.and_then(|cause| {
            find_artist_by_id_or_slug(artist_id)
                .and_then(|artist| artist.find_page(page_id).map(|page| (artist, page)))
                .map(|found| (found, cause))
        });

        let Some(((artist, (index, page)), cause)) = fixture else {
            return Err(PageError::NotFound.into());
        };

        tracing::warn!(artist = %artist_id, page = %page_id, cause = %cause, "Serving demo page");

        Ok(Sourced::degraded(page.to_page_dto(artist, index, true), cause))
    }

    /// Creates a page at the end of the artist's page order
    ///
    /// # Returns
    /// - `Ok(PageDto)`: The page with its sections, at version 1
    /// - `Err(Error::ValidationError)`: Empty title or malformed slug
    /// - `Err(Error::ArtistError(ArtistError::NotFound))`: Unknown artist
    /// - `Err(Error::PageError(PageError::SlugTaken))`: Slug used by another page of the artist
    pub async fn create(&self, artist_id: &str, page: UpsertPageDto) -> Result<PageDto, Error> {
        require_non_empty("title", &page.title)?;
        require_slug(&page.slug)?;

        let txn = self.db.begin().await?;

        let artist = find_artist(&txn, artist_id).await?;
        let page_repo = PageRepository::new(&txn);

        if page_repo.slug_taken(&artist.id, &page.slug, None).await? {
            return Err(PageError::SlugTaken(page.slug).into());
        }

        let order_index = page_repo.count_by_artist(&artist.id).await? as i32;
        let is_hidden = resolve_visibility(page.status, page.is_hidden).unwrap_or(false);

        let created = page_repo
            .create(
                &artist.id,
                page.title.trim().to_string(),
                page.slug,
                page.seo_description,
                is_hidden,
                order_index,
            )
            .await?;

        let sections = SectionRepository::new(&txn)
            .replace_for_page(&created.id, page.sections)
            .await?;

        txn.commit().await?;

        tracing::info!(artist_id = %artist.id, page_id = %created.id, "Page created");

        page_to_dto(&artist.slug, created, Some(sections))
    }

    /// Replaces a page's fields and section set
    ///
    /// `expected_version` comes from `If-Match`; `None` skips the check. Visibility defaults
    /// to visible when neither `status` nor `isHidden` is given.
    pub async fn update(
        &self,
        artist_id: &str,
        page_id: &str,
        expected_version: Option<i32>,
        page: UpsertPageDto,
    ) -> Result<PageDto, Error> {
        require_non_empty("title", &page.title)?;
        require_slug(&page.slug)?;

        let txn = self.db.begin().await?;

        let artist = find_artist(&txn, artist_id).await?;
        let current = find_page(&txn, &artist, page_id, expected_version).await?;
        let page_repo = PageRepository::new(&txn);

        if page_repo
            .slug_taken(&artist.id, &page.slug, Some(&current.id))
            .await?
        {
            return Err(PageError::SlugTaken(page.slug).into());
        }

        let changes = PageChanges {
            title: Some(page.title.trim().to_string()),
            slug: Some(page.slug),
            seo_description: page.seo_description.map(Some),
            is_hidden: Some(resolve_visibility(page.status, page.is_hidden).unwrap_or(false)),
        };

        let updated = page_repo.update(current, changes).await?;
        let sections = SectionRepository::new(&txn)
            .replace_for_page(&updated.id, page.sections)
            .await?;

        txn.commit().await?;

        tracing::info!(page_id = %updated.id, version = updated.version, "Page updated");

        page_to_dto(&artist.slug, updated, Some(sections))
    }

    /// Changes only the supplied fields of a page
    ///
    /// Sections are replaced when supplied and left untouched otherwise. Visibility is left
    /// unchanged when neither `status` nor `isHidden` is given.
    pub async fn patch(
        &self,
        artist_id: &str,
        page_id: &str,
        expected_version: Option<i32>,
        page: PatchPageDto,
    ) -> Result<PageDto, Error> {
        validate_patch(&page)?;

        let txn = self.db.begin().await?;

        let artist = find_artist(&txn, artist_id).await?;
        let current = find_page(&txn, &artist, page_id, expected_version).await?;
        let patched = apply_patch(&txn, &artist, current, page).await?;

        txn.commit().await?;

        Ok(patched)
    }

    /// Same as [`PageService::patch`] for a page addressed by its id alone
    pub async fn patch_by_id(
        &self,
        page_id: &str,
        expected_version: Option<i32>,
        page: PatchPageDto,
    ) -> Result<PageDto, Error> {
        validate_patch(&page)?;

        let txn = self.db.begin().await?;

        let current = PageRepository::new(&txn)
            .find_by_id(page_id)
            .await?
            .ok_or(PageError::NotFound)?;
        check_version(&current, expected_version)?;
        let artist = find_artist(&txn, &current.artist_id).await?;
        let patched = apply_patch(&txn, &artist, current, page).await?;

        txn.commit().await?;

        Ok(patched)
    }

    /// `None` when the store does not know the artist
    async fn list_from_store(
        &self,
        artist_id: &str,
        status: Option<PageStatus>,
        include_sections: bool,
    ) -> Result<Option<Result<Vec<PageDto>, Error>>, DbErr> {
        let Some(artist) = ArtistRepository::new(self.db)
            .find_by_id_or_slug(artist_id)
            .await?
        else {
            return Ok(None);
        };

        let pages = PageRepository::new(self.db)
            .find_by_artist(&artist.id, status.map(|status| status == PageStatus::Draft))
            .await?;

        if !include_sections {
            return Ok(Some(
                pages
                    .into_iter()
                    .map(|page| page_to_dto(&artist.slug, page, None))
                    .collect(),
            ));
        }

        let page_ids: Vec<String> = pages.iter().map(|page| page.id.clone()).collect();
        let mut sections_by_page: HashMap<String, Vec<SectionModel>> = HashMap::new();
        for section in SectionRepository::new(self.db)
            .find_by_pages(&page_ids)
            .await?
        {
            sections_by_page
                .entry(section.page_id.clone())
                .or_default()
                .push(section);
        }

        Ok(Some(
            pages
                .into_iter()
                .map(|page| {
                    let sections = sections_by_page.remove(&page.id).unwrap_or_default();
                    page_to_dto(&artist.slug, page, Some(sections))
                })
                .collect(),
        ))
    }

    /// `None` when the store knows neither the artist nor the page
    async fn get_from_store(
        &self,
        artist_id: &str,
        page_id: &str,
    ) -> Result<Option<Result<PageDto, Error>>, DbErr> {
        let Some(artist) = ArtistRepository::new(self.db)
            .find_by_id_or_slug(artist_id)
            .await?
        else {
            return Ok(None);
        };

        let Some(page) = PageRepository::new(self.db)
            .find_one(&artist.id, page_id)
            .await?
        else {
            return Ok(None);
        };

        let sections = SectionRepository::new(self.db).find_by_page(&page.id).await?;

        Ok(Some(page_to_dto(&artist.slug, page, Some(sections))))
    }
}

/// Hidden flag implied by a write: `status` wins over `isHidden`
///
/// `None` when the write says nothing about visibility.
pub fn resolve_visibility(status: Option<PageStatus>, is_hidden: Option<bool>) -> Option<bool> {
    match status {
        Some(status) => Some(status == PageStatus::Draft),
        None => is_hidden,
    }
}

async fn find_artist<C: ConnectionTrait>(db: &C, artist_id: &str) -> Result<ArtistModel, Error> {
    ArtistRepository::new(db)
        .find_by_id_or_slug(artist_id)
        .await?
        .ok_or_else(|| ArtistError::NotFound(artist_id.to_string()).into())
}

/// Loads the page to write and checks it against the client's version
async fn find_page<C: ConnectionTrait>(
    db: &C,
    artist: &ArtistModel,
    page_id: &str,
    expected_version: Option<i32>,
) -> Result<PageModel, Error> {
    let page = PageRepository::new(db)
        .find_one(&artist.id, page_id)
        .await?
        .ok_or(PageError::NotFound)?;

    check_version(&page, expected_version)?;

    Ok(page)
}

fn check_version(page: &PageModel, expected_version: Option<i32>) -> Result<(), PageError> {
    match expected_version {
        Some(expected) if expected != page.version => Err(PageError::VersionMismatch {
            expected,
            current: page.version,
        }),
        _ => Ok(()),
    }
}

fn validate_patch(page: &PatchPageDto) -> Result<(), Error> {
    if let Some(title) = &page.title {
        require_non_empty("title", title)?;
    }
    if let Some(slug) = &page.slug {
        require_slug(slug)?;
    }

    Ok(())
}

async fn apply_patch<C: ConnectionTrait>(
    db: &C,
    artist: &ArtistModel,
    current: PageModel,
    page: PatchPageDto,
) -> Result<PageDto, Error> {
    let page_repo = PageRepository::new(db);

    if let Some(slug) = &page.slug {
        if page_repo
            .slug_taken(&artist.id, slug, Some(&current.id))
            .await?
        {
            return Err(PageError::SlugTaken(slug.clone()).into());
        }
    }

    let changes = PageChanges {
        title: page.title.map(|title| title.trim().to_string()),
        slug: page.slug,
        seo_description: page.seo_description,
        is_hidden: resolve_visibility(page.status, page.is_hidden),
    };

    let updated = page_repo.update(current, changes).await?;
    let section_repo = SectionRepository::new(db);
    let sections = match page.sections {
        Some(sections) => section_repo.replace_for_page(&updated.id, sections).await?,
        None => section_repo.find_by_page(&updated.id).await?,
    };

    tracing::info!(page_id = %updated.id, version = updated.version, "Page patched");

    page_to_dto(&artist.slug, updated, Some(sections))
}

fn page_to_dto(
    artist_slug: &str,
    page: PageModel,
    sections: Option<Vec<SectionModel>>,
) -> Result<PageDto, Error> {
    let sections = sections
        .map(|sections| {
            sections
                .into_iter()
                .map(section_to_dto)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    Ok(PageDto {
        full_slug: [artist_slug, page.slug.as_str()]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
        status: PageStatus::from_hidden(page.is_hidden),
        id: page.id,
        artist_id: page.artist_id,
        title: page.title,
        slug: page.slug,
        seo_description: page.seo_description,
        is_hidden: page.is_hidden,
        order_index: page.order_index,
        version: page.version,
        theme: None,
        sections,
        updated_at: page.updated_at.and_utc(),
    })
}

fn section_to_dto(section: SectionModel) -> Result<SectionDto, Error> {
    Ok(SectionDto {
        section_type: section.section_type.parse().map_err(Error::ParseError)?,
        id: section.id,
        data: section.data,
        is_visible: section.is_visible,
        order_index: section.order_index,
    })
}

#[cfg(test)]
mod tests;
