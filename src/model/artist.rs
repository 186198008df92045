use serde::{Deserialize, Serialize};

/// Colour tokens applied to an artist site or page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ThemeDto {
    pub background: String,
    pub accent: String,
    pub text: String,
}

/// Navigation entry of an artist site
///
/// `slug` holds the path segments relative to the artist root, `href` the absolute path
/// prefixed with the artist slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NavigationItemDto {
    pub label: String,
    pub slug: Vec<String>,
    pub href: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub id: String,
    /// Owning account, absent for demo artists
    pub account_id: Option<String>,
    pub slug: String,
    pub display_name: String,
    pub tagline: Option<String>,
    pub plan_id: Option<String>,
    pub custom_domain: Option<String>,
    pub subdomain: Option<String>,
    pub theme: Option<ThemeDto>,
    pub accent_color: Option<String>,
    pub seo_description: Option<String>,
    pub navigation: Vec<NavigationItemDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistDto {
    pub account_id: String,
    pub display_name: String,
    /// Derived from the display name when omitted
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeDto>,
}
