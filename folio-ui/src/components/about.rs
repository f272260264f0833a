//! Biography section

use crate::components::reveal::RevealSection;
use dioxus::prelude::*;
use folio_common::{About, SectionId};

#[component]
pub fn AboutSection(about: About, reveal: bool) -> Element {
    rsx! {
        RevealSection {
            id: SectionId::About,
            reveal,
            class: "py-24 px-6 bg-slate-800",
            div { class: "container mx-auto max-w-6xl",
                div { class: "grid md:grid-cols-2 gap-16 items-center",
                    div {
                        h2 { class: "text-4xl md:text-5xl font-bold mb-8 text-balance text-white",
                            "{about.heading}"
                        }
                        div { class: "space-y-6 text-lg text-slate-100",
                            for (i , paragraph) in about.paragraphs.iter().enumerate() {
                                p { key: "{i}", "{paragraph}" }
                            }
                            if !about.highlights.is_empty() {
                                div { class: "grid grid-cols-2 gap-4 pt-6",
                                    for highlight in about.highlights.iter() {
                                        div { key: "{highlight.title}",
                                            h3 { class: "font-semibold text-white mb-2", "{highlight.title}" }
                                            for (i , line) in highlight.lines.iter().enumerate() {
                                                p { key: "{i}", class: "text-sm", "{line}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "relative",
                        div { class: "rounded-lg overflow-hidden shadow-xl inline-block",
                            img {
                                src: "{about.portrait.source}",
                                alt: "{about.portrait.alt}",
                                class: "w-auto h-auto max-w-full max-h-[695px] object-contain",
                            }
                        }
                        if let Some(inset) = &about.inset {
                            div { class: "absolute -bottom-6 -right-6 w-48 h-32 bg-white rounded-lg shadow-lg overflow-hidden border border-slate-200",
                                img {
                                    src: "{inset.source}",
                                    alt: "{inset.alt}",
                                    class: "w-full h-full object-cover",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
