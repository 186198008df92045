use serde::{Deserialize, Serialize};

/// A plan from the static catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub id: String,
    pub name: String,
    /// Monthly price in euros
    pub price: u32,
    /// Maximum number of pages, `null` when unlimited
    pub page_limit: Option<u32>,
    pub storage_limit_mb: Option<u64>,
    pub contact_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<String>,
}

/// Current consumption measured against a plan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanUsageDto {
    pub pages: u64,
    pub storage_mb: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LimitState {
    Ok,
    Warning,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LimitMetric {
    Pages,
    Storage,
}

/// Derived ok/warning/blocked signal, never stored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LimitIndicatorDto {
    pub state: LimitState,
    pub metric: LimitMetric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
