//! Account read model assembled before plan evaluation.

/// Account with per-artist usage, from the store or the demo fixture.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountRecord {
    /// Account id
    pub id: String,
    /// Display name
    pub name: String,
    /// Plan applied to artists without their own
    pub plan_id: String,
    /// Billing status, e.g. `active`
    pub status: String,
    /// Account-level storage figure, overrides the sum over artists when set
    pub storage_usage_mb: Option<u64>,
    /// Artists owned by the account
    pub artists: Vec<ArtistUsageRecord>,
}

/// One artist of an account with its current usage.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistUsageRecord {
    /// Artist id
    pub id: String,
    /// Display name
    pub name: String,
    /// Public slug
    pub slug: String,
    /// Overrides the account plan when set
    pub plan_id: Option<String>,
    /// Number of stored pages
    pub page_count: u64,
    /// Storage used in megabytes, if measured
    pub storage_mb: Option<u64>,
}
