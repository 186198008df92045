use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::artist::ThemeDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
}

impl PageStatus {
    /// Hidden pages are drafts, visible pages are published
    pub fn from_hidden(is_hidden: bool) -> Self {
        if is_hidden {
            Self::Draft
        } else {
            Self::Published
        }
    }
}

/// Fixed set of content blocks a page can be built from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    Gallery,
    Quote,
    Cta,
    Stats,
    Testimonials,
    Contact,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::Quote => "quote",
            Self::Cta => "cta",
            Self::Stats => "stats",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "gallery" => Ok(Self::Gallery),
            "quote" => Ok(Self::Quote),
            "cta" => Ok(Self::Cta),
            "stats" => Ok(Self::Stats),
            "testimonials" => Ok(Self::Testimonials),
            "contact" => Ok(Self::Contact),
            other => Err(format!("Unknown section type: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    pub is_visible: bool,
    pub order_index: i32,
}

/// Section as submitted by the page builder
///
/// An `id` that already belongs to the page keeps that section's identity, anything else
/// becomes a new section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionInputDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: String,
    pub artist_id: String,
    pub title: String,
    /// Slug relative to the artist root, empty for a home page
    pub slug: String,
    /// Artist slug followed by the page slug
    pub full_slug: Vec<String>,
    pub seo_description: Option<String>,
    pub is_hidden: bool,
    pub status: PageStatus,
    pub order_index: i32,
    pub version: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeDto>,
    /// Present when sections were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionDto>>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a page, used by create and update
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPageDto {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub is_hidden: Option<bool>,
    /// Takes precedence over `isHidden` when both are given
    #[serde(default)]
    pub status: Option<PageStatus>,
    pub sections: Vec<SectionInputDto>,
}

/// Partial page update, only supplied fields change
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchPageDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// `null` clears the stored description, omitting the field keeps it
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub seo_description: Option<Option<String>>,
    #[serde(default)]
    pub is_hidden: Option<bool>,
    #[serde(default)]
    pub status: Option<PageStatus>,
    #[serde(default)]
    pub sections: Option<Vec<SectionInputDto>>,
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`, via `default`)
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListPagesQuery {
    /// Restrict to drafts (hidden) or published (visible) pages
    #[serde(default)]
    pub status: Option<PageStatus>,
    /// Embed ordered sections in each page
    #[serde(default)]
    pub include_sections: Option<bool>,
}
