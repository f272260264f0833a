//! Full-viewport hero banner

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::particles::FloatingParticles;
use crate::components::reveal::RevealSection;
use dioxus::prelude::*;
use folio_common::{AmbientConfig, Hero, SectionId};

#[component]
pub fn HeroSection(hero: Hero, ambient: AmbientConfig, on_navigate: EventHandler<SectionId>) -> Element {
    let cta_target = hero.cta_target;
    let marquee = hero.marquee_text();

    rsx! {
        RevealSection {
            id: SectionId::Hero,
            reveal: ambient.scroll_reveal,
            class: "h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-slate-200 via-gray-100 to-slate-100",

            if let Some(image) = &hero.image {
                div { class: "absolute right-0 top-0 w-1/2 h-full opacity-35",
                    img {
                        src: "{image.source}",
                        alt: "{image.alt}",
                        class: "w-full h-full object-cover",
                    }
                }
            }

            // Decorative shapes and lines
            div { class: "absolute inset-0 z-[2] pointer-events-none", aria_hidden: "true",
                div { class: "absolute top-1/4 left-1/4 w-32 h-32 border border-blue-200 rotate-45 animate-spin-slow" }
                div { class: "absolute top-3/4 right-1/4 w-24 h-24 border border-slate-200 rotate-12 animate-pulse" }
                div { class: "absolute top-1/2 left-1/6 w-16 h-16 bg-blue-300 rounded-full animate-bounce-slow" }
                div { class: "absolute bottom-1/4 left-1/2 w-20 h-20 border-2 border-blue-200 rounded-full animate-ping-slow" }
                div { class: "absolute top-1/3 right-1/3 w-40 h-px bg-gradient-to-r from-transparent via-blue-400 to-transparent animate-slide-right" }
                div { class: "absolute bottom-1/3 left-1/3 w-32 h-px bg-gradient-to-l from-transparent via-slate-300 to-transparent animate-slide-left" }
            }

            if ambient.particles {
                FloatingParticles {}
            }

            div { class: "relative z-10 text-center max-w-4xl mx-auto px-6",
                h1 { class: "text-6xl md:text-8xl font-bold mb-6 text-balance leading-tight",
                    span { class: "relative inline-block text-slate-900",
                        "{hero.first_name}"
                        span { class: "absolute inset-0 bg-gradient-to-r from-blue-200/30 via-transparent to-blue-200/30 animate-shimmer" }
                    }
                    span { class: "block text-slate-600 relative",
                        "{hero.last_name}"
                        span { class: "absolute inset-0 bg-gradient-to-r from-blue-300/40 via-transparent to-blue-300/40 animate-shimmer-reverse" }
                    }
                }
                p { class: "text-xl md:text-2xl text-slate-600 mb-8 font-light", "{hero.role}" }
                p { class: "text-lg text-slate-700 mb-12 max-w-2xl mx-auto text-pretty",
                    "{hero.summary}"
                }
                Button {
                    variant: ButtonVariant::Muted,
                    size: ButtonSize::Large,
                    onclick: move |_| on_navigate.call(cta_target),
                    "{hero.cta_label}"
                }
            }

            if !marquee.is_empty() {
                div { class: "absolute bottom-0 left-0 right-0 overflow-hidden border-t border-slate-200 bg-white/80",
                    div { class: "animate-marquee whitespace-nowrap py-4 text-sm text-slate-500",
                        "{marquee}"
                    }
                }
            }
        }
    }
}
