//! Gallery section
//!
//! The overlay is rendered after the section: the reveal animation gives the
//! section its own stacking context, which would put a nested fixed overlay
//! under the navigation bar and the sections that follow.

use crate::components::gallery_viewer::{use_gallery_state, GalleryGrid, GalleryOverlay};
use crate::components::reveal::RevealSection;
use dioxus::prelude::*;
use folio_common::{GallerySection, SectionId};

#[component]
pub fn GallerySectionView(gallery: GallerySection, reveal: bool) -> Element {
    let state = use_gallery_state(gallery.items.clone());

    rsx! {
        RevealSection {
            id: SectionId::Gallery,
            reveal,
            class: "py-24 px-6 bg-gradient-to-b from-white to-gray-50",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-12",
                    h2 { class: "text-3xl sm:text-4xl lg:text-5xl font-extrabold tracking-tight text-gray-900",
                        "{gallery.heading}"
                    }
                    if let Some(intro) = &gallery.intro {
                        p { class: "mt-4 text-lg sm:text-xl text-gray-600 max-w-2xl mx-auto", "{intro}" }
                    }
                }
                GalleryGrid { state }
            }
        }
        GalleryOverlay { state }
    }
}
