//! Bundled content document

use folio_common::{ContentError, PortfolioContent};
use tracing::{error, info};

/// Site content, compiled into the binary
const BUNDLED_CONTENT: &str = include_str!("../content/portfolio.json");

/// Parse and validate the bundled content.
pub fn load_bundled() -> Result<PortfolioContent, ContentError> {
    match PortfolioContent::from_json(BUNDLED_CONTENT) {
        Ok(content) => {
            info!(
                "Loaded content: {} gallery items, {} awards",
                content.gallery.items.len(),
                content.awards.awards.len()
                    + content
                        .international_awards
                        .as_ref()
                        .map_or(0, |section| section.awards.len())
            );
            Ok(content)
        }
        Err(e) => {
            error!("Bundled content is unusable: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::{GalleryState, SectionId};

    #[test]
    fn test_bundled_content_is_valid() {
        let content = load_bundled().unwrap();
        assert_eq!(content.gallery.items.len(), 9);
        assert_eq!(content.awards.awards.len(), 6);
        assert_eq!(
            content.international_awards.as_ref().map(|s| s.awards.len()),
            Some(9)
        );
    }

    #[test]
    fn test_navigation_covers_every_section() {
        let content = load_bundled().unwrap();
        let targets: Vec<SectionId> = content.navigation.iter().map(|l| l.target).collect();
        for section in [
            SectionId::Hero,
            SectionId::About,
            SectionId::InternationalAwards,
            SectionId::Awards,
            SectionId::Gallery,
            SectionId::Contact,
        ] {
            assert!(targets.contains(&section), "missing link to {section}");
        }
    }

    #[test]
    fn test_bundled_gallery_wraps_around() {
        let content = load_bundled().unwrap();
        let mut gallery = GalleryState::new(content.gallery.items.clone());
        let last = gallery.len() - 1;
        gallery.open(last);
        gallery.next();
        assert_eq!(gallery.open_index(), Some(0));
        assert_eq!(
            gallery.current().map(|item| item.source.as_str()),
            Some("/gallery/ram1.jpg")
        );
    }
}
