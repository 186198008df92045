//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate.

/// Billing account owning one or more artists.
///
/// # Fields (from `entity::folio_account::Model`)
/// - `id` - Primary key
/// - `owner_user_id` - Identity provider subject of the owner (unique)
/// - `plan_id` - Catalog plan of the account
/// - `storage_usage_mb` - Account-wide storage figure, overrides the per-artist sum when set
pub type AccountModel = entity::folio_account::Model;

/// Tenant, one portfolio site.
///
/// # Fields (from `entity::folio_artist::Model`)
/// - `slug` - Globally unique slug, also matched against the first host label
/// - `custom_domain` - Optional exact host match
/// - `plan_id` - Overrides the account plan when set
/// - `theme`, `navigation` - JSON documents
pub type ArtistModel = entity::folio_artist::Model;

/// Page of an artist site; `slug` is unique within the artist.
pub type PageModel = entity::folio_page::Model;

/// Ordered content block of a page.
pub type SectionModel = entity::folio_page_section::Model;
