//! Demo account substituted when the overview cannot be read from the store.

use crate::server::model::account::{AccountRecord, ArtistUsageRecord};

/// Id of the demo account.
pub const DEMO_ACCOUNT_ID: &str = "demo-account";

/// Demo account on the pro plan.
pub fn demo_account() -> AccountRecord {
    AccountRecord {
        id: DEMO_ACCOUNT_ID.to_string(),
        name: "Compte de démonstration".to_string(),
        plan_id: "pro".to_string(),
        status: "active".to_string(),
        storage_usage_mb: Some(5120),
        artists: vec![
            ArtistUsageRecord {
                id: "atelier-nova".to_string(),
                name: "Atelier Nova".to_string(),
                slug: "atelier-nova".to_string(),
                plan_id: Some("pro".to_string()),
                page_count: 5,
                storage_mb: Some(2048),
            },
            ArtistUsageRecord {
                id: "lune-onirique".to_string(),
                name: "Lune Onirique".to_string(),
                slug: "lune-onirique".to_string(),
                plan_id: Some("freemium".to_string()),
                page_count: 3,
                storage_mb: Some(1024),
            },
        ],
    }
}
