//! Static plan catalog and limit evaluation.

use crate::model::plan::{LimitIndicatorDto, LimitMetric, LimitState, PlanDto, PlanUsageDto};

/// Share of a limit from which usage is reported as a warning.
const WARNING_RATIO: f64 = 0.8;

/// Every plan, cheapest first.
pub fn catalog() -> Vec<PlanDto> {
    vec![
        PlanDto {
            id: "freemium".to_string(),
            name: "Freemium".to_string(),
            price: 0,
            page_limit: Some(3),
            storage_limit_mb: Some(1024),
            contact_enabled: false,
            collaborators: None,
        },
        PlanDto {
            id: "pro".to_string(),
            name: "Pro".to_string(),
            price: 29,
            page_limit: None,
            storage_limit_mb: Some(10240),
            contact_enabled: true,
            collaborators: None,
        },
        PlanDto {
            id: "studio".to_string(),
            name: "Studio".to_string(),
            price: 79,
            page_limit: None,
            storage_limit_mb: Some(51200),
            contact_enabled: true,
            collaborators: Some("illimités".to_string()),
        },
    ]
}

/// Looks up a plan, unknown ids resolve to the free plan.
pub fn find_plan(id: &str) -> PlanDto {
    let mut plans = catalog();
    // The free plan is first in the catalog
    let index = plans.iter().position(|plan| plan.id == id).unwrap_or(0);

    plans.swap_remove(index)
}

/// Rates usage against a plan; the first matching rule wins.
///
/// 1. pages at or over the page limit: blocked
/// 2. pages at 80% of the page limit: warning
/// 3. storage at or over the storage limit: blocked
/// 4. storage at 80% of the storage limit: warning
/// 5. otherwise ok
///
/// A limit of zero is treated as unset.
pub fn evaluate_limit(usage: &PlanUsageDto, plan: &PlanDto) -> LimitIndicatorDto {
    let page_limit = plan.page_limit.filter(|limit| *limit > 0).map(u64::from);
    let storage_limit = plan.storage_limit_mb.filter(|limit| *limit > 0);

    if let Some(limit) = page_limit {
        if usage.pages >= limit {
            return indicator(
                LimitState::Blocked,
                LimitMetric::Pages,
                "Limite de pages atteinte pour ce plan",
            );
        }
        if usage.pages as f64 / limit as f64 >= WARNING_RATIO {
            return indicator(
                LimitState::Warning,
                LimitMetric::Pages,
                "Vous approchez de la limite de pages incluse dans votre abonnement.",
            );
        }
    }

    if let Some(limit) = storage_limit {
        if usage.storage_mb >= limit {
            return indicator(
                LimitState::Blocked,
                LimitMetric::Storage,
                "Espace de stockage saturé. Veuillez libérer de la place ou passer au plan supérieur.",
            );
        }
        if usage.storage_mb as f64 / limit as f64 >= WARNING_RATIO {
            return indicator(
                LimitState::Warning,
                LimitMetric::Storage,
                "Espace de stockage presque saturé.",
            );
        }
    }

    LimitIndicatorDto {
        state: LimitState::Ok,
        metric: LimitMetric::Pages,
        message: None,
    }
}

fn indicator(state: LimitState, metric: LimitMetric, message: &str) -> LimitIndicatorDto {
    LimitIndicatorDto {
        state,
        metric,
        message: Some(message.to_string()),
    }
}
