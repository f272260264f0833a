//! Portfolio content document
//!
//! All copy, award records and image lists live in one JSON document that is
//! parsed and validated once at startup. Components receive the parsed
//! structs as props and never hold their own copy of the data.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::gallery::ImageItem;

/// Page sections that can be scrolled to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Hero,
    About,
    InternationalAwards,
    Awards,
    Gallery,
    Contact,
}

impl SectionId {
    /// DOM id of the section element
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::InternationalAwards => "international-awards",
            SectionId::Awards => "awards",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// An image with its description
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub source: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Shown in the fixed navigation bar
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub target: SectionId,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub summary: String,
    pub image: Option<Picture>,
    pub cta_label: String,
    pub cta_target: SectionId,
    #[serde(default)]
    pub marquee: Vec<String>,
}

impl Hero {
    /// Marquee strip text: entries separated and terminated by a bullet
    pub fn marquee_text(&self) -> String {
        self.marquee
            .iter()
            .map(|entry| format!("{} • ", entry.to_uppercase()))
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    pub portrait: Picture,
    pub inset: Option<Picture>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub year: String,
    pub title: String,
    pub organization: Option<String>,
    pub location: String,
    pub image: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardSection {
    pub heading: String,
    pub intro: Option<String>,
    /// Round badge image above the heading
    pub emblem: Option<Picture>,
    pub awards: Vec<Award>,
}

impl AwardSection {
    /// Award images as gallery items, for the single-image lightbox
    pub fn image_items(&self) -> Vec<ImageItem> {
        self.awards
            .iter()
            .map(|award| ImageItem::new(award.image.clone()).with_alt(award.title.clone()))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySection {
    pub heading: String,
    pub intro: Option<String>,
    pub items: Vec<ImageItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactOffer {
    pub title: String,
    pub subtitle: String,
    pub image: Option<Picture>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub message: String,
    pub image: Option<Picture>,
    #[serde(default)]
    pub offers: Vec<ContactOffer>,
    pub cta_label: String,
    /// `tel:` or `mailto:` link
    pub cta_href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub name: String,
    pub role: String,
    pub portrait: Option<Picture>,
    pub credential: Option<String>,
    pub copyright: String,
}

/// Switches for the decorative effects that aren't part of the content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbientConfig {
    #[serde(default = "enabled")]
    pub particles: bool,
    #[serde(default = "enabled")]
    pub scroll_reveal: bool,
}

fn enabled() -> bool {
    true
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            particles: true,
            scroll_reveal: true,
        }
    }
}

/// The whole site's content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub site: SiteMeta,
    pub navigation: Vec<NavLink>,
    pub hero: Hero,
    pub about: About,
    pub international_awards: Option<AwardSection>,
    pub awards: AwardSection,
    pub gallery: GallerySection,
    pub contact: Contact,
    pub footer: Footer,
    #[serde(default)]
    pub ambient: AmbientConfig,
}

impl PortfolioContent {
    /// Parse and validate a JSON content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.navigation.is_empty() {
            return Err(ContentError::EmptyNavigation);
        }
        let mut seen = HashSet::new();
        for link in &self.navigation {
            if !seen.insert(link.target) {
                return Err(ContentError::DuplicateNavTarget(link.target));
            }
        }

        check_sources(
            SectionId::Gallery,
            self.gallery.items.iter().map(|item| item.source.as_str()),
        )?;
        check_sources(
            SectionId::Awards,
            self.awards.awards.iter().map(|award| award.image.as_str()),
        )?;
        if let Some(international) = &self.international_awards {
            check_sources(
                SectionId::InternationalAwards,
                international.awards.iter().map(|award| award.image.as_str()),
            )?;
        }
        Ok(())
    }
}

fn check_sources<'a>(
    section: SectionId,
    sources: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    for (index, source) in sources.enumerate() {
        if source.trim().is_empty() {
            return Err(ContentError::EmptyImageSource { section, index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "site": { "title": "Studio" },
        "navigation": [
            { "target": "hero", "label": "Home" },
            { "target": "gallery", "label": "Gallery" }
        ],
        "hero": {
            "first_name": "Ada",
            "last_name": "Stone",
            "role": "Sculptor",
            "summary": "Works in clay.",
            "image": null,
            "cta_label": "Explore",
            "cta_target": "about",
            "marquee": ["sculptor", "fine artist"]
        },
        "about": {
            "heading": "About",
            "paragraphs": ["One."],
            "portrait": { "source": "/me.jpg", "alt": "Portrait" },
            "inset": null
        },
        "international_awards": null,
        "awards": {
            "heading": "Awards",
            "intro": null,
            "emblem": null,
            "awards": [
                {
                    "year": "2017",
                    "title": "Scholarship",
                    "organization": "Ministry of Culture",
                    "location": "Delhi",
                    "image": "/awards/a.jpg",
                    "description": null
                }
            ]
        },
        "gallery": {
            "heading": "Works",
            "intro": null,
            "items": [
                { "source": "/gallery/a.jpg", "alt": "First" },
                { "source": "/gallery/b.jpg", "featured": true }
            ]
        },
        "contact": {
            "heading": "Contact",
            "message": "Say hi.",
            "image": null,
            "cta_label": "Call",
            "cta_href": "tel:+10000000000"
        },
        "footer": {
            "name": "Ada Stone",
            "role": "Sculptor",
            "portrait": null,
            "credential": null,
            "copyright": "© Ada Stone"
        }
    }"#;

    fn minimal() -> PortfolioContent {
        PortfolioContent::from_json(MINIMAL).unwrap()
    }

    #[test]
    fn test_parses_minimal_document() {
        let content = minimal();
        assert_eq!(content.navigation.len(), 2);
        assert_eq!(content.hero.cta_target, SectionId::About);
        assert_eq!(content.gallery.items.len(), 2);
        assert_eq!(content.gallery.items[0].alt_text.as_deref(), Some("First"));
        assert!(content.gallery.items[1].featured);
        assert!(content.gallery.items[1].alt_text.is_none());
    }

    #[test]
    fn test_ambient_defaults_to_enabled() {
        let content = minimal();
        assert_eq!(content.ambient, AmbientConfig::default());
        assert!(content.ambient.particles);
        assert!(content.ambient.scroll_reveal);
    }

    #[test]
    fn test_partial_ambient_fills_defaults() {
        let config: AmbientConfig = serde_json::from_str(r#"{ "particles": false }"#).unwrap();
        assert!(!config.particles);
        assert!(config.scroll_reveal);
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let json = MINIMAL.replace(r#""target": "gallery""#, r#""target": "exhibitions""#);
        let err = PortfolioContent::from_json(&json).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = PortfolioContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_empty_navigation_rejected() {
        let mut content = minimal();
        content.navigation.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptyNavigation)
        ));
    }

    #[test]
    fn test_duplicate_nav_target_rejected() {
        let mut content = minimal();
        content.navigation.push(NavLink {
            target: SectionId::Hero,
            label: "Top".into(),
        });
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateNavTarget(SectionId::Hero))
        ));
    }

    #[test]
    fn test_empty_gallery_source_rejected() {
        let mut content = minimal();
        content.gallery.items[1].source = " ".into();
        match content.validate() {
            Err(ContentError::EmptyImageSource { section, index }) => {
                assert_eq!(section, SectionId::Gallery);
                assert_eq!(index, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_award_image_rejected() {
        let mut content = minimal();
        content.awards.awards[0].image.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptyImageSource {
                section: SectionId::Awards,
                index: 0
            })
        ));
    }

    #[test]
    fn test_error_messages_name_the_section() {
        let err = ContentError::EmptyImageSource {
            section: SectionId::InternationalAwards,
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Image 3 in international-awards has an empty source"
        );
    }

    #[test]
    fn test_marquee_text() {
        let content = minimal();
        assert_eq!(content.hero.marquee_text(), "SCULPTOR • FINE ARTIST •");
    }

    #[test]
    fn test_award_image_items_use_titles_as_alt() {
        let content = minimal();
        let items = content.awards.image_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source, "/awards/a.jpg");
        assert_eq!(items[0].alt_or_placeholder(0), "Scholarship");
    }

    #[test]
    fn test_section_dom_ids_match_serde_names() {
        for section in [
            SectionId::Hero,
            SectionId::About,
            SectionId::InternationalAwards,
            SectionId::Awards,
            SectionId::Gallery,
            SectionId::Contact,
        ] {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.dom_id()));
        }
    }
}
