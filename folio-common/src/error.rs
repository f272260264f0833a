use thiserror::Error;

use crate::content::SectionId;

/// Reasons a content document can't be used
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Image {index} in {section} has an empty source")]
    EmptyImageSource { section: SectionId, index: usize },
    #[error("Navigation has no links")]
    EmptyNavigation,
    #[error("Navigation links to {0} more than once")]
    DuplicateNavTarget(SectionId),
}
