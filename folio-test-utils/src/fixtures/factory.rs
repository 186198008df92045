//! In-memory models with standard test values.

use chrono::Utc;
use serde_json::json;

pub fn mock_account_model(id: &str, owner_user_id: &str, plan_id: &str) -> entity::folio_account::Model {
    entity::folio_account::Model {
        id: id.to_string(),
        owner_user_id: owner_user_id.to_string(),
        name: "Atelier Camille".to_string(),
        plan_id: plan_id.to_string(),
        status: "active".to_string(),
        storage_usage_mb: None,
        created_at: Utc::now().naive_utc(),
    }
}

/// Artist without plan override, domain, theme, or navigation.
pub fn mock_artist_model(id: &str, account_id: &str, slug: &str) -> entity::folio_artist::Model {
    entity::folio_artist::Model {
        id: id.to_string(),
        account_id: account_id.to_string(),
        slug: slug.to_string(),
        display_name: "Camille Roche".to_string(),
        tagline: None,
        plan_id: None,
        custom_domain: None,
        subdomain: None,
        theme: None,
        accent_color: None,
        seo_description: None,
        navigation: None,
        storage_usage_mb: None,
        created_at: Utc::now().naive_utc(),
    }
}

/// Artist with a custom domain, theme, and two navigation entries.
pub fn mock_branded_artist_model(
    id: &str,
    account_id: &str,
    slug: &str,
    custom_domain: &str,
) -> entity::folio_artist::Model {
    entity::folio_artist::Model {
        tagline: Some("Céramiques et lumière".to_string()),
        plan_id: Some("pro".to_string()),
        custom_domain: Some(custom_domain.to_string()),
        theme: Some(json!({
            "background": "#101010",
            "accent": "#ff8800",
            "text": "#fafafa"
        })),
        accent_color: Some("#ff8800".to_string()),
        navigation: Some(json!([
            { "label": "Accueil" },
            { "label": "Série", "slug": ["serie"] }
        ])),
        ..mock_artist_model(id, account_id, slug)
    }
}

pub fn mock_page_model(
    id: &str,
    artist_id: &str,
    slug: &str,
    order_index: i32,
    is_hidden: bool,
) -> entity::folio_page::Model {
    let now = Utc::now().naive_utc();

    entity::folio_page::Model {
        id: id.to_string(),
        artist_id: artist_id.to_string(),
        title: format!("Page {}", slug),
        slug: slug.to_string(),
        seo_description: None,
        is_hidden,
        order_index,
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_section_model(
    id: &str,
    page_id: &str,
    section_type: &str,
    order_index: i32,
) -> entity::folio_page_section::Model {
    entity::folio_page_section::Model {
        id: id.to_string(),
        page_id: page_id.to_string(),
        section_type: section_type.to_string(),
        data: json!({ "heading": id }),
        is_visible: true,
        order_index,
    }
}
