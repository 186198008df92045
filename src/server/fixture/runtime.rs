//! Demo tenants with their navigation and published pages.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::{
    model::{
        artist::{ArtistDto, NavigationItemDto, ThemeDto},
        page::{PageDto, PageStatus, SectionDto, SectionType},
    },
    server::util::host::first_label,
};

/// A demo tenant.
pub struct FixtureArtist {
    /// Artist id
    pub id: &'static str,
    /// Public slug, also matched against the host's first label
    pub slug: &'static str,
    /// Display name
    pub display_name: &'static str,
    /// Short line shown under the name
    pub tagline: &'static str,
    /// Plan id in the catalog
    pub plan_id: &'static str,
    /// Custom domain, already normalized
    pub domain: &'static str,
    /// Site theme
    pub theme: ThemeDto,
    /// Hex accent color
    pub accent_color: &'static str,
    /// Site-wide SEO description
    pub seo_description: Option<&'static str>,
    /// Label and path segments relative to the artist root
    pub navigation: Vec<(&'static str, Vec<&'static str>)>,
    /// Pages in display order
    pub pages: Vec<FixturePage>,
}

/// A page of a demo tenant.
pub struct FixturePage {
    /// Page id
    pub id: &'static str,
    /// Page title
    pub title: &'static str,
    /// Empty for the artist's home page
    pub slug: &'static str,
    /// Draft pages are hidden
    pub status: PageStatus,
    /// Page SEO description
    pub seo_description: Option<&'static str>,
    /// Page theme
    pub theme: ThemeDto,
    /// Section type and payload, in order
    pub sections: Vec<(SectionType, Value)>,
    /// Last edit time reported to clients
    pub updated_at: DateTime<Utc>,
}

impl FixtureArtist {
    /// Navigation with hrefs prefixed by the artist slug.
    pub fn navigation_items(&self) -> Vec<NavigationItemDto> {
        self.navigation
            .iter()
            .map(|(label, slug)| {
                let slug: Vec<String> = slug.iter().map(|s| s.to_string()).collect();

                NavigationItemDto {
                    label: label.to_string(),
                    href: artist_href(self.slug, &slug),
                    slug,
                }
            })
            .collect()
    }

    /// Artist record in the same shape as a stored artist.
    pub fn to_artist_dto(&self) -> ArtistDto {
        ArtistDto {
            id: self.id.to_string(),
            account_id: None,
            slug: self.slug.to_string(),
            display_name: self.display_name.to_string(),
            tagline: Some(self.tagline.to_string()),
            plan_id: Some(self.plan_id.to_string()),
            custom_domain: Some(self.domain.to_string()),
            subdomain: Some(self.slug.to_string()),
            theme: Some(self.theme.clone()),
            accent_color: Some(self.accent_color.to_string()),
            seo_description: self.seo_description.map(str::to_string),
            navigation: self.navigation_items(),
        }
    }

    /// Page with its position in the artist's order.
    pub fn find_page(&self, page_id: &str) -> Option<(usize, &FixturePage)> {
        self.pages.iter().enumerate().find(|(_, page)| page.id == page_id)
    }
}

impl FixturePage {
    /// Whether the page is a draft.
    pub fn is_hidden(&self) -> bool {
        self.status == PageStatus::Draft
    }

    /// Artist slug followed by the page slug, if any.
    pub fn full_slug(&self, artist_slug: &str) -> Vec<String> {
        [artist_slug, self.slug]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Page record at `order_index`, with sections when requested.
    pub fn to_page_dto(&self, artist: &FixtureArtist, order_index: usize, include_sections: bool) -> PageDto {
        let sections = include_sections.then(|| {
            self.sections
                .iter()
                .enumerate()
                .map(|(index, (section_type, data))| SectionDto {
                    id: format!("{}-section-{}", self.id, index),
                    section_type: *section_type,
                    data: data.clone(),
                    is_visible: true,
                    order_index: index as i32,
                })
                .collect()
        });

        PageDto {
            id: self.id.to_string(),
            artist_id: artist.id.to_string(),
            title: self.title.to_string(),
            slug: self.slug.to_string(),
            full_slug: self.full_slug(artist.slug),
            seo_description: self.seo_description.map(str::to_string),
            is_hidden: self.is_hidden(),
            status: self.status,
            order_index: order_index as i32,
            version: 1,
            theme: Some(self.theme.clone()),
            sections,
            updated_at: self.updated_at,
        }
    }
}

/// `/` followed by the artist slug and the item's path segments.
pub fn artist_href(artist_slug: &str, slug: &[String]) -> String {
    let segments: Vec<&str> = std::iter::once(artist_slug)
        .chain(slug.iter().map(String::as_str))
        .filter(|segment| !segment.is_empty())
        .collect();

    format!("/{}", segments.join("/"))
}

/// Finds a demo artist by exact domain, then by the host's first label as slug.
///
/// `host` must already be normalized.
pub fn find_artist_by_host(host: &str) -> Option<&'static FixtureArtist> {
    let artists = artists();

    artists.iter().find(|artist| artist.domain == host).or_else(|| {
        let label = first_label(host);
        artists.iter().find(|artist| artist.slug == label)
    })
}

/// Finds a demo artist by id or slug.
pub fn find_artist_by_id_or_slug(identifier: &str) -> Option<&'static FixtureArtist> {
    artists()
        .iter()
        .find(|artist| artist.id == identifier || artist.slug == identifier)
}

/// Every demo artist.
pub fn artists() -> &'static [FixtureArtist] {
    &ARTISTS
}

/// Theme applied to stored artists that have none.
pub fn default_theme() -> ThemeDto {
    ARTISTS[0].theme.clone()
}

/// Accent colour applied to stored artists that have none.
pub fn default_accent_color() -> &'static str {
    ARTISTS[0].accent_color
}

fn theme(background: &str, accent: &str, text: &str) -> ThemeDto {
    ThemeDto {
        background: background.to_string(),
        accent: accent.to_string(),
        text: text.to_string(),
    }
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

static ARTISTS: LazyLock<Vec<FixtureArtist>> = LazyLock::new(|| {
    vec![
        FixtureArtist {
            id: "artist-lys-astrale",
            slug: "lys-astrale",
            display_name: "Lys Astrale",
            tagline: "Surréalismes irisés & lumières numériques",
            plan_id: "pro",
            domain: "lys-astrale.portfolio.local",
            theme: theme(
                "linear-gradient(120deg, #0d0221 0%, #220135 100%)",
                "#c084fc",
                "#f8f7ff",
            ),
            accent_color: "#c084fc",
            seo_description: Some(
                "Le portfolio immersif de Lys Astrale, artiste numérique et sculptrice de lumière.",
            ),
            navigation: vec![
                ("Accueil", vec![]),
                ("Galerie", vec!["galerie"]),
                ("Contact", vec!["contact"]),
            ],
            pages: vec![
                FixturePage {
                    id: "page-lys-home",
                    title: "Univers de Lys Astrale",
                    slug: "",
                    status: PageStatus::Published,
                    seo_description: Some(
                        "Découvrez l’univers onirique de Lys Astrale, artiste numérique parisienne.",
                    ),
                    theme: theme(
                        "linear-gradient(140deg, rgba(29, 8, 53, 0.96), rgba(8, 5, 20, 0.98))",
                        "#c084fc",
                        "#f4f0ff",
                    ),
                    sections: vec![
                        (
                            SectionType::Hero,
                            json!({
                                "heading": "Lys Astrale",
                                "subheading": "Immersions numériques & sculptures lumineuses",
                                "kicker": "Portfolio officiel"
                            }),
                        ),
                        (
                            SectionType::Stats,
                            json!({
                                "items": [
                                    { "label": "Expositions", "value": "24", "helper": "Europe & Asie" },
                                    { "label": "Œuvres disponibles", "value": "46", "helper": "séries limitées" },
                                    { "label": "Collaborations", "value": "18", "helper": "studios & marques" }
                                ]
                            }),
                        ),
                        (
                            SectionType::Gallery,
                            json!({
                                "artworks": [
                                    { "title": "Spectre Violet", "image": "/images/demo-1.jpg" },
                                    { "title": "Nébuleuse I", "image": "/images/demo-2.jpg" },
                                    { "title": "Lumière Liquide", "image": "/images/demo-3.jpg" }
                                ]
                            }),
                        ),
                        (
                            SectionType::Quote,
                            json!({
                                "content": "Chaque installation est un portail vers une émotion lumineuse.",
                                "author": "Lys Astrale"
                            }),
                        ),
                        (
                            SectionType::Cta,
                            json!({
                                "title": "Découvrir les séries immersives",
                                "description": "Téléchargez la brochure media kit et accédez aux tarifs de location.",
                                "buttonLabel": "Télécharger le media kit",
                                "href": "https://lys-astrale.com/media-kit"
                            }),
                        ),
                    ],
                    updated_at: timestamp(1715328000),
                },
                FixturePage {
                    id: "page-lys-gallery",
                    title: "Galerie immersive",
                    slug: "galerie",
                    status: PageStatus::Published,
                    seo_description: None,
                    theme: theme(
                        "linear-gradient(160deg, rgba(14, 8, 37, 0.94), rgba(6, 0, 24, 0.98))",
                        "#22d3ee",
                        "#ecfeff",
                    ),
                    sections: vec![
                        (
                            SectionType::Hero,
                            json!({
                                "heading": "Galerie immersive",
                                "subheading": "Une sélection de pièces audiovisuelles modulaires"
                            }),
                        ),
                        (
                            SectionType::Gallery,
                            json!({
                                "artworks": [
                                    { "title": "Echos Prismatiques", "image": "/images/demo-4.jpg" },
                                    { "title": "Comète", "image": "/images/demo-5.jpg" },
                                    { "title": "Saturne", "image": "/images/demo-6.jpg" },
                                    { "title": "Nébuleuse II", "image": "/images/demo-7.jpg" }
                                ]
                            }),
                        ),
                        (
                            SectionType::Testimonials,
                            json!({
                                "items": [
                                    {
                                        "quote": "Une immersion vibrante qui capte l’attention dès les premières secondes.",
                                        "name": "Élodie Trintignant",
                                        "role": "Curatrice, Nuit Chromatique"
                                    },
                                    {
                                        "quote": "Lys réinvente la scénographie lumineuse avec une précision hypnotique.",
                                        "name": "Marc Ayden",
                                        "role": "Directeur artistique, VisionLab"
                                    }
                                ]
                            }),
                        ),
                    ],
                    updated_at: timestamp(1715422200),
                },
                FixturePage {
                    id: "page-lys-contact",
                    title: "Collaborer",
                    slug: "contact",
                    status: PageStatus::Published,
                    seo_description: None,
                    theme: theme(
                        "linear-gradient(160deg, rgba(13, 4, 29, 0.95), rgba(34, 5, 52, 0.98))",
                        "#f97316",
                        "#fdf2f8",
                    ),
                    sections: vec![(
                        SectionType::Contact,
                        json!({
                            "title": "Inviter Lys Astrale",
                            "description": "Partagez les détails de votre exposition ou collaboration. Réponse sous 48h."
                        }),
                    )],
                    updated_at: timestamp(1715515200),
                },
            ],
        },
        FixtureArtist {
            id: "artist-atelier-nova",
            slug: "atelier-nova",
            display_name: "Atelier Nova",
            tagline: "Illustrations cosmiques & design sonore",
            plan_id: "freemium",
            domain: "atelier-nova.portfolio.local",
            theme: theme(
                "linear-gradient(120deg, #05090f 0%, #0c1220 100%)",
                "#38bdf8",
                "#f4faff",
            ),
            accent_color: "#38bdf8",
            seo_description: Some(
                "Atelier Nova combine illustration numérique et paysages sonores éthérés.",
            ),
            navigation: vec![("Accueil", vec![]), ("Collection", vec!["collection"])],
            pages: vec![
                FixturePage {
                    id: "page-nova-home",
                    title: "Univers Atelier Nova",
                    slug: "",
                    status: PageStatus::Published,
                    seo_description: None,
                    theme: theme(
                        "linear-gradient(180deg, rgba(5, 12, 30, 0.95), rgba(3, 7, 18, 0.98))",
                        "#38bdf8",
                        "#e0f2fe",
                    ),
                    sections: vec![
                        (
                            SectionType::Hero,
                            json!({
                                "heading": "Atelier Nova",
                                "subheading": "Illustrations cosmiques & design sonore",
                                "kicker": "Studio indépendant"
                            }),
                        ),
                        (
                            SectionType::Gallery,
                            json!({
                                "artworks": [
                                    { "title": "Pulsar", "image": "/images/nova-1.jpg" },
                                    { "title": "Marée Astrale", "image": "/images/nova-2.jpg" },
                                    { "title": "Halo Bleu", "image": "/images/nova-3.jpg" }
                                ]
                            }),
                        ),
                        (
                            SectionType::Quote,
                            json!({
                                "content": "Nous mêlons textures sonores et textures visuelles pour raconter des épopées stellaires.",
                                "author": "Atelier Nova"
                            }),
                        ),
                    ],
                    updated_at: timestamp(1716024600),
                },
                FixturePage {
                    id: "page-nova-collection",
                    title: "Collection Cosmica",
                    slug: "collection",
                    status: PageStatus::Published,
                    seo_description: None,
                    theme: theme(
                        "linear-gradient(150deg, rgba(4, 8, 20, 0.96), rgba(5, 12, 30, 0.98))",
                        "#facc15",
                        "#fefce8",
                    ),
                    sections: vec![
                        (
                            SectionType::Hero,
                            json!({
                                "heading": "Collection Cosmica",
                                "subheading": "Une exploration colorée de constellations imaginaires"
                            }),
                        ),
                        (
                            SectionType::Gallery,
                            json!({
                                "artworks": [
                                    { "title": "Fragment Orbital", "image": "/images/nova-4.jpg" },
                                    { "title": "Lune Synthétique", "image": "/images/nova-5.jpg" },
                                    { "title": "Flux Stellaire", "image": "/images/nova-6.jpg" }
                                ]
                            }),
                        ),
                    ],
                    updated_at: timestamp(1716133500),
                },
            ],
        },
    ]
});
