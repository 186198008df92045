use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    artist::{NavigationItemDto, ThemeDto},
    plan::PlanDto,
};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveHostQuery {
    /// Inbound host header, an optional port is ignored
    pub host: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeArtistDto {
    pub id: String,
    pub slug: String,
    pub display_name: String,
    pub tagline: String,
    pub plan_id: String,
    pub theme: ThemeDto,
    pub accent_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

/// Published page reference used to build the tenant's site map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuntimePageSummaryDto {
    pub id: String,
    pub title: String,
    pub slug: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeResolutionDto {
    pub artist: RuntimeArtistDto,
    pub navigation: Vec<NavigationItemDto>,
    pub plan: PlanDto,
    pub pages: Vec<RuntimePageSummaryDto>,
    /// How long the resolution may be cached
    pub ttl_seconds: u32,
    /// Set when the payload comes from fixture data rather than the store
    pub degraded: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RuntimeEventDto {
    pub event: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub payload: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeContactDto {
    pub artist_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactReceiptDto {
    pub status: String,
    pub message: String,
}
