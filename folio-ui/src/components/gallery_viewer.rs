//! Artwork gallery: masonry grid of thumbnails plus the lightbox overlay
//!
//! The grid and the overlay share one `Signal<GalleryState>` and can be
//! rendered in different places of the tree.

use crate::components::icons::StarIcon;
use crate::components::lightbox::LightboxView;
use crate::wasm_utils::DocumentEventListener;
use dioxus::prelude::*;
use folio_common::{GalleryState, ImageItem, ViewerInput};

/// Masonry heights, cycled through by grid position
const THUMBNAIL_HEIGHTS: [&str; 8] = [
    "h-96", "h-96", "h-60", "h-65", "h-86", "h-125", "h-96", "h-109",
];

/// Height class for a thumbnail. Featured items get a fixed taller slot.
pub fn thumbnail_height(index: usize, featured: bool) -> &'static str {
    if featured {
        "h-120"
    } else {
        THUMBNAIL_HEIGHTS[index % THUMBNAIL_HEIGHTS.len()]
    }
}

/// Keep `slot` holding a listener exactly while the viewer is open.
///
/// Closing drops the held listener, which detaches it. Opening attaches one
/// via `attach` unless a listener is already held.
pub fn sync_open_listener<L>(open: bool, slot: &mut Option<L>, attach: impl FnOnce() -> Option<L>) {
    if !open {
        slot.take();
    } else if slot.is_none() {
        *slot = attach();
    }
}

/// Gallery state for `items`, with an Escape listener held only while open.
///
/// The keydown listener is attached to the document when an image opens and
/// dropped when the viewer closes or the calling component unmounts.
pub fn use_gallery_state(items: Vec<ImageItem>) -> Signal<GalleryState> {
    let mut state = use_signal(|| GalleryState::new(items.clone()));
    let mut escape_listener: Signal<Option<DocumentEventListener>> = use_signal(|| None);

    // A parent passing a different list gets a fresh, closed viewer
    use_effect(use_reactive!(|(items,)| {
        if state.peek().items() != items.as_slice() {
            state.set(GalleryState::new(items));
        }
    }));

    use_effect(move || {
        let open = state.read().is_open();
        sync_open_listener(open, &mut *escape_listener.write(), || {
            DocumentEventListener::on_key(move |key| {
                state.write().dispatch(ViewerInput::Key(key));
            })
        });
    });

    use_drop(move || {
        if let Ok(mut listener) = escape_listener.try_write() {
            listener.take();
        }
    });

    state
}

/// Thumbnail grid with a lightbox over it while an image is open.
///
/// Sections that animate their own layer should render `GalleryGrid` inside
/// and `GalleryOverlay` after the section instead, so the fixed overlay is not
/// trapped in the section's stacking context.
#[component]
pub fn GalleryViewer(items: Vec<ImageItem>) -> Element {
    let state = use_gallery_state(items);

    rsx! {
        GalleryGrid { state }
        GalleryOverlay { state }
    }
}

/// Masonry grid of thumbnails; clicking one opens it in `state`
#[component]
pub fn GalleryGrid(state: Signal<GalleryState>) -> Element {
    let mut state = state;
    let gallery = state.read();

    rsx! {
        div { class: "columns-1 sm:columns-2 lg:columns-3 xl:columns-4 gap-6 space-y-6",
            for (i , item) in gallery.items().iter().enumerate() {
                GalleryThumbnail {
                    key: "{i}-{item.source}",
                    item: item.clone(),
                    index: i,
                    on_open: move |index: usize| {
                        state.write().dispatch(ViewerInput::Thumbnail(index));
                    },
                }
            }
        }
    }
}

/// The lightbox for the open image of `state`. Renders nothing while closed.
#[component]
pub fn GalleryOverlay(
    state: Signal<GalleryState>,
    #[props(default = true)] show_navigation: bool,
) -> Element {
    let mut state = state;
    let gallery = state.read();
    let total = gallery.len();
    let (index, item) = match gallery.open_index().zip(gallery.current()) {
        Some((index, item)) => (index, item.clone()),
        None => return rsx! {},
    };

    rsx! {
        LightboxView {
            item,
            index,
            total,
            show_navigation,
            on_input: move |input: ViewerInput| {
                state.write().dispatch(input);
            },
        }
    }
}

#[component]
fn GalleryThumbnail(item: ImageItem, index: usize, on_open: EventHandler<usize>) -> Element {
    let alt = item.alt_or_placeholder(index);
    let height = thumbnail_height(index, item.featured);
    let ring = if item.featured {
        "ring-4 ring-yellow-500 scale-105"
    } else {
        ""
    };

    rsx! {
        div {
            class: "relative break-inside-avoid group cursor-pointer {height}",
            "data-testid": "gallery-thumbnail",
            onclick: move |_| on_open.call(index),
            div { class: "relative w-full h-full rounded-2xl overflow-hidden shadow-md hover:shadow-2xl transition-all duration-500 {ring}",
                div { class: "absolute inset-0 bg-gradient-to-t from-black/40 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 z-10" }
                img {
                    src: "{item.source}",
                    alt: "{alt}",
                    loading: "lazy",
                    class: "w-full h-full object-cover group-hover:scale-110 transition-transform duration-700",
                }
                div { class: "absolute bottom-4 left-4 right-4 text-white opacity-0 group-hover:opacity-100 transition-opacity duration-500 z-20",
                    if item.featured {
                        p { class: "text-base font-semibold drop-shadow-md flex items-center gap-1",
                            StarIcon { class: "w-4 h-4 text-yellow-400" }
                            "Featured Artwork"
                        }
                    }
                    p { class: "text-sm opacity-90", "{alt}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_thumbnail_heights_cycle() {
        assert_eq!(thumbnail_height(0, false), "h-96");
        assert_eq!(thumbnail_height(5, false), "h-125");
        assert_eq!(thumbnail_height(8, false), "h-96");
        assert_eq!(thumbnail_height(13, false), "h-125");
    }

    #[test]
    fn test_featured_thumbnail_is_taller() {
        assert_eq!(thumbnail_height(2, true), "h-120");
    }

    struct CountsDrops(Rc<Cell<usize>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_listener_held_only_while_open() {
        let drops = Rc::new(Cell::new(0));
        let mut attached = 0;
        let mut slot: Option<CountsDrops> = None;

        sync_open_listener(false, &mut slot, || {
            attached += 1;
            Some(CountsDrops(drops.clone()))
        });
        assert!(slot.is_none());
        assert_eq!(attached, 0);

        sync_open_listener(true, &mut slot, || {
            attached += 1;
            Some(CountsDrops(drops.clone()))
        });
        assert!(slot.is_some());

        // Navigating while open keeps the same listener
        sync_open_listener(true, &mut slot, || {
            attached += 1;
            Some(CountsDrops(drops.clone()))
        });
        assert_eq!(attached, 1);
        assert_eq!(drops.get(), 0);

        sync_open_listener(false, &mut slot, || {
            attached += 1;
            Some(CountsDrops(drops.clone()))
        });
        assert!(slot.is_none());
        assert_eq!(drops.get(), 1);
        assert_eq!(attached, 1);
    }

    fn sample_items() -> Vec<ImageItem> {
        vec![
            ImageItem::new("a.jpg").with_alt("First"),
            ImageItem::new("b.jpg").with_alt("Second"),
            ImageItem::new("c.jpg").with_alt("Third"),
        ]
    }

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    const THUMBNAIL: &str = r#"data-testid="gallery-thumbnail""#;
    const LIGHTBOX: &str = r#"data-testid="lightbox""#;

    #[test]
    fn test_closed_viewer_renders_grid_in_order_without_overlay() {
        let html = render(|| {
            rsx! {
                GalleryViewer { items: sample_items() }
            }
        });

        assert_eq!(html.matches(THUMBNAIL).count(), 3);
        assert_eq!(html.matches(LIGHTBOX).count(), 0);

        let a = html.find(r#"src="a.jpg""#).unwrap();
        let b = html.find(r#"src="b.jpg""#).unwrap();
        let c = html.find(r#"src="c.jpg""#).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_open_viewer_renders_exactly_one_overlay_for_open_item() {
        let html = render(|| {
            let mut state = use_gallery_state(sample_items());
            use_hook(|| {
                state.write().open(1);
            });
            rsx! {
                GalleryGrid { state }
                GalleryOverlay { state }
            }
        });

        assert_eq!(html.matches(THUMBNAIL).count(), 3);
        assert_eq!(html.matches(LIGHTBOX).count(), 1);

        let overlay = &html[html.find(LIGHTBOX).unwrap()..];
        assert!(overlay.contains(r#"src="b.jpg""#));
        assert!(!overlay.contains(r#"src="a.jpg""#));
        assert!(!overlay.contains(r#"src="c.jpg""#));
    }

    #[test]
    fn test_empty_gallery_renders_nothing_to_open() {
        let html = render(|| {
            rsx! {
                GalleryViewer { items: Vec::new() }
            }
        });

        assert_eq!(html.matches(THUMBNAIL).count(), 0);
        assert_eq!(html.matches(LIGHTBOX).count(), 0);
    }
}
