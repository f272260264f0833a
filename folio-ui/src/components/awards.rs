//! Award listings
//!
//! Two layouts over the same `Award` record: a stacked list of wide cards for
//! international awards, and a card grid whose images open in a lightbox.

use crate::components::gallery_viewer::{use_gallery_state, GalleryOverlay};
use crate::components::icons::MapPinIcon;
use crate::components::reveal::RevealSection;
use dioxus::prelude::*;
use folio_common::{Award, AwardSection, SectionId, ViewerInput};

/// Slide-in direction alternates down the list
pub fn slide_in_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "animate-slide-in-left"
    } else {
        "animate-slide-in-right"
    }
}

#[component]
pub fn InternationalAwardsSection(section: AwardSection, reveal: bool) -> Element {
    rsx! {
        RevealSection {
            id: SectionId::InternationalAwards,
            reveal,
            class: "py-24 px-6 bg-gradient-to-r from-lime-100 via-rose-100 to-indigo-200 overflow-hidden",
            div { class: "container mx-auto max-w-6xl",
                div { class: "text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold text-balance text-slate-900",
                        "{section.heading}"
                    }
                    if let Some(intro) = &section.intro {
                        p { class: "mt-4 text-slate-800", "{intro}" }
                    }
                }
                div { class: "space-y-12",
                    for (i , award) in section.awards.iter().enumerate() {
                        InternationalAwardCard { key: "{i}", award: award.clone(), index: i }
                    }
                }
            }
        }
    }
}

#[component]
fn InternationalAwardCard(award: Award, index: usize) -> Element {
    let slide = slide_in_class(index);

    rsx! {
        div { class: "relative bg-white rounded-2xl shadow-2xl p-8 border border-indigo-700 flex flex-col sm:flex-row items-center gap-8 transition-all duration-700 hover:scale-105 {slide}",
            div { class: "w-40 h-40 flex-shrink-0 bg-slate-100 rounded-xl overflow-hidden shadow-inner",
                img {
                    src: "{award.image}",
                    alt: "{award.title}",
                    loading: "lazy",
                    class: "w-full h-full object-cover",
                }
            }
            div {
                span { class: "inline-block px-4 py-1 text-sm font-medium bg-indigo-100 text-indigo-800 rounded-full mb-4",
                    "{award.year}"
                }
                h3 { class: "text-2xl font-bold text-slate-900 mb-3", "{award.title}" }
                if let Some(description) = &award.description {
                    p { class: "text-slate-600 mb-4", "{description}" }
                }
                p { class: "text-sm text-slate-500 flex items-center gap-1",
                    MapPinIcon {}
                    "{award.location}"
                }
            }
        }
    }
}

/// Award card grid. Clicking an award image enlarges it; the enlarged view
/// closes on its button, the backdrop, or Escape, and has no next/previous.
#[component]
pub fn AwardsSection(section: AwardSection, reveal: bool) -> Element {
    let mut viewer = use_gallery_state(section.image_items());

    rsx! {
        RevealSection {
            id: SectionId::Awards,
            reveal,
            class: "py-24 px-6 bg-gradient-to-br from-indigo-100 via-blue-50 to-indigo-200 relative overflow-hidden",
            div { class: "absolute inset-0 bg-[radial-gradient(circle_at_top_left,rgba(59,130,246,0.2),transparent_60%)]" }

            div { class: "container mx-auto max-w-6xl relative z-10",
                div { class: "text-center mb-16",
                    if let Some(emblem) = &section.emblem {
                        div { class: "w-24 h-24 mx-auto mb-6 rounded-full overflow-hidden shadow-lg",
                            img {
                                src: "{emblem.source}",
                                alt: "{emblem.alt}",
                                class: "w-full h-full object-cover rounded-full",
                            }
                        }
                    }
                    h2 { class: "text-4xl md:text-5xl font-bold text-slate-900", "{section.heading}" }
                    if let Some(intro) = &section.intro {
                        p { class: "mt-4 text-slate-700", "{intro}" }
                    }
                }
                div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-10",
                    for (i , award) in section.awards.iter().enumerate() {
                        AwardCard {
                            key: "{i}",
                            award: award.clone(),
                            on_image_click: move |_| {
                                viewer.write().dispatch(ViewerInput::Thumbnail(i));
                            },
                        }
                    }
                }
            }
        }
        // Outside the section so the reveal animation's layer can't cover it
        GalleryOverlay { state: viewer, show_navigation: false }
    }
}

#[component]
fn AwardCard(award: Award, on_image_click: EventHandler<()>) -> Element {
    rsx! {
        div { class: "p-6 bg-white/80 rounded-xl shadow-lg transition-transform duration-500 hover:scale-105 hover:shadow-2xl hover:shadow-blue-200/40",
            div {
                class: "w-full h-36 mb-4 rounded-lg overflow-hidden transition-all duration-500 hover:scale-110 cursor-pointer",
                onclick: move |_| on_image_click.call(()),
                img {
                    src: "{award.image}",
                    alt: "{award.title}",
                    loading: "lazy",
                    class: "w-full h-full object-cover",
                }
            }
            div { class: "flex items-start gap-4",
                span { class: "px-2.5 py-0.5 text-xs font-semibold rounded-md bg-blue-100 text-blue-800 border border-blue-200 shadow-sm",
                    "{award.year}"
                }
                div { class: "flex-1",
                    h3 { class: "font-semibold mb-2 leading-tight text-slate-900 hover:text-blue-600 transition-colors",
                        "{award.title}"
                    }
                    if let Some(organization) = &award.organization {
                        p { class: "text-sm text-slate-600 mb-1", "{organization}" }
                    }
                    p { class: "text-sm text-slate-500 flex items-center gap-1",
                        MapPinIcon { class: "h-3 w-3 text-blue-500" }
                        "{award.location}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_in_alternates() {
        assert_eq!(slide_in_class(0), "animate-slide-in-left");
        assert_eq!(slide_in_class(1), "animate-slide-in-right");
        assert_eq!(slide_in_class(4), "animate-slide-in-left");
    }
}
