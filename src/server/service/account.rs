//! Back-office account overview with per-artist plan limits.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        account::{AccountOverviewDto, AccountSummaryDto, ArtistSummaryDto},
        plan::PlanUsageDto,
    },
    server::{
        data::{account::AccountRepository, artist::ArtistRepository, page::PageRepository},
        error::{account::AccountError, Error},
        fixture::account::demo_account,
        model::{
            account::{AccountRecord, ArtistUsageRecord},
            source::{FallbackCause, Sourced},
        },
        service::plan::{evaluate_limit, find_plan},
    },
};

/// Builds account overviews from the store or the demo account
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    fixture_fallback: bool,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection, fixture_fallback: bool) -> Self {
        Self {
            db,
            fixture_fallback,
        }
    }

    /// Builds the overview of the account owned by `user_id`
    ///
    /// # Returns
    /// - `Ok(Sourced::Live)`: Account read from the store
    /// - `Ok(Sourced::Degraded)`: Store failed or user owns no account, demo account served
    /// - `Err(Error::AccountError(AccountError::NotFound))`: No account and fallback disabled
    /// - `Err(Error::DbErr)`: Store failure with fallback disabled
    pub async fn get_overview(&self, user_id: &str) -> Result<Sourced<AccountOverviewDto>, Error> {
        let error = match self.find_record(user_id).await {
            Ok(Some(record)) => return Ok(Sourced::Live(build_overview(record, false))),
            Ok(None) => None,
            Err(err) => Some(err),
        };

        let Some(cause) = FallbackCause::for_lookup(error, self.fixture_fallback)? else {
            return Err(AccountError::NotFound(user_id.to_string()).into());
        };

        tracing::warn!(user_id = %user_id, cause = %cause, "Serving demo account");

        Ok(Sourced::degraded(build_overview(demo_account(), true), cause))
    }

    /// Lists the artists of `account_id` if it belongs to `user_id`
    pub async fn get_artists_for_account(
        &self,
        account_id: &str,
        user_id: &str,
    ) -> Result<Sourced<Vec<ArtistSummaryDto>>, Error> {
        let overview = self.get_overview(user_id).await?;

        if overview.data().account.id != account_id {
            tracing::debug!(user_id = %user_id, account_id = %account_id, "Cross-account access refused");

            return Err(AccountError::AccessDenied.into());
        }

        Ok(overview.map(|overview| overview.artists))
    }

    async fn find_record(&self, user_id: &str) -> Result<Option<AccountRecord>, DbErr> {
        let Some(account) = AccountRepository::new(self.db).find_by_owner(user_id).await? else {
            return Ok(None);
        };

        let artists = ArtistRepository::new(self.db)
            .find_by_account(&account.id)
            .await?;
        let artist_ids: Vec<String> = artists.iter().map(|artist| artist.id.clone()).collect();
        let page_counts = PageRepository::new(self.db)
            .count_by_artists(&artist_ids)
            .await?;

        let artists = artists
            .into_iter()
            .map(|artist| ArtistUsageRecord {
                page_count: page_counts.get(&artist.id).copied().unwrap_or(0),
                storage_mb: artist.storage_usage_mb.map(megabytes),
                id: artist.id,
                name: artist.display_name,
                slug: artist.slug,
                plan_id: artist.plan_id,
            })
            .collect();

        Ok(Some(AccountRecord {
            id: account.id,
            name: account.name,
            plan_id: account.plan_id,
            status: account.status,
            storage_usage_mb: account.storage_usage_mb.map(megabytes),
            artists,
        }))
    }
}

/// Rates every artist against its effective plan and sums account usage
///
/// Account storage is the account-level figure when set, else the sum over artists.
pub fn build_overview(record: AccountRecord, degraded: bool) -> AccountOverviewDto {
    let account_plan = find_plan(&record.plan_id);

    let artists: Vec<ArtistSummaryDto> = record
        .artists
        .into_iter()
        .map(|artist| {
            let plan = artist
                .plan_id
                .as_deref()
                .map(find_plan)
                .unwrap_or_else(|| account_plan.clone());
            let usage = PlanUsageDto {
                pages: artist.page_count,
                storage_mb: artist.storage_mb.unwrap_or(0),
            };

            ArtistSummaryDto {
                limit: evaluate_limit(&usage, &plan),
                id: artist.id,
                name: artist.name,
                slug: artist.slug,
                plan_id: plan.id,
                page_count: usage.pages,
                storage_mb: usage.storage_mb,
            }
        })
        .collect();

    let usage = PlanUsageDto {
        pages: artists.iter().map(|artist| artist.page_count).sum(),
        storage_mb: record
            .storage_usage_mb
            .unwrap_or_else(|| artists.iter().map(|artist| artist.storage_mb).sum()),
    };

    AccountOverviewDto {
        account: AccountSummaryDto {
            id: record.id,
            name: record.name,
            plan: account_plan,
            status: record.status,
            usage,
        },
        artists,
        degraded,
    }
}

fn megabytes(value: i64) -> u64 {
    value.max(0) as u64
}
