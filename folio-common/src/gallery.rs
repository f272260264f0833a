use serde::{Deserialize, Serialize};

/// One artwork in the gallery
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    pub source: String,
    #[serde(default, rename = "alt", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Highlighted in the grid
    #[serde(default)]
    pub featured: bool,
}

impl ImageItem {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: None,
            featured: false,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = Some(alt.into());
        self
    }

    /// Alt text, falling back to "Artwork N" where N is the 1-based position.
    pub fn alt_or_placeholder(&self, index: usize) -> String {
        match &self.alt_text {
            Some(alt) if !alt.trim().is_empty() => alt.clone(),
            _ => format!("Artwork {}", index + 1),
        }
    }
}

/// Everything the viewer can react to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerInput {
    /// Click on the thumbnail at this index
    Thumbnail(usize),
    CloseControl,
    /// Click on the overlay outside the image
    Backdrop,
    /// Click on the displayed image itself
    Image,
    NextControl,
    PreviousControl,
    /// Key press, by `KeyboardEvent.key` name
    Key(String),
}

/// Ordered images plus the index of the one shown in the overlay.
///
/// `open_index`, when set, is always a valid index into `items`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    items: Vec<ImageItem>,
    open_index: Option<usize>,
}

impl GalleryState {
    pub fn new(items: Vec<ImageItem>) -> Self {
        Self {
            items,
            open_index: None,
        }
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    /// The item shown in the overlay, if any.
    pub fn current(&self) -> Option<&ImageItem> {
        self.open_index.and_then(|i| self.items.get(i))
    }

    /// Show the item at `index`. Out-of-range indices are refused and
    /// leave the state untouched.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::warn!(
                "Refusing to open gallery index {} of {}",
                index,
                self.items.len()
            );
            return false;
        }
        self.open_index = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.open_index = None;
    }

    /// Advance to the next item, wrapping from last to first.
    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        if let Some(i) = self.open_index {
            self.open_index = Some((i + 1) % len);
        }
    }

    /// Step back to the previous item, wrapping from first to last.
    pub fn previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        if let Some(i) = self.open_index {
            self.open_index = Some((i + len - 1) % len);
        }
    }

    /// Apply an input event. Returns whether `open_index` changed.
    pub fn dispatch(&mut self, input: ViewerInput) -> bool {
        let before = self.open_index;
        match input {
            ViewerInput::Thumbnail(index) => {
                self.open(index);
            }
            ViewerInput::CloseControl | ViewerInput::Backdrop => self.close(),
            ViewerInput::Image => {}
            ViewerInput::NextControl => self.next(),
            ViewerInput::PreviousControl => self.previous(),
            ViewerInput::Key(key) => {
                if key == "Escape" {
                    self.close();
                }
            }
        }
        let changed = before != self.open_index;
        if changed {
            tracing::debug!("Gallery viewer: {:?} -> {:?}", before, self.open_index);
        }
        changed
    }
}
