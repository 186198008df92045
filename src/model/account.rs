use serde::{Deserialize, Serialize};

use super::plan::{LimitIndicatorDto, PlanDto, PlanUsageDto};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummaryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Effective plan, the artist's own or else the account's
    pub plan_id: String,
    pub page_count: u64,
    pub storage_mb: u64,
    pub limit: LimitIndicatorDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummaryDto {
    pub id: String,
    pub name: String,
    pub plan: PlanDto,
    pub status: String,
    pub usage: PlanUsageDto,
}

/// Back-office read model of an account and its artists
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverviewDto {
    pub account: AccountSummaryDto,
    pub artists: Vec<ArtistSummaryDto>,
    /// Set when the demo account was substituted
    pub degraded: bool,
}

/// Identity extracted from a verified access token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthUserDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthProfileDto {
    pub user: AuthUserDto,
    pub account: AccountSummaryDto,
}
