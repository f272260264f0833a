//! Contact section and page footer

use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::components::reveal::RevealSection;
use dioxus::prelude::*;
use folio_common::{Contact, ContactOffer, Footer, SectionId};

#[component]
pub fn ContactSection(contact: Contact, reveal: bool) -> Element {
    rsx! {
        RevealSection {
            id: SectionId::Contact,
            reveal,
            class: "py-24 px-6 bg-white",
            div { class: "container mx-auto max-w-4xl text-center",
                if let Some(image) = &contact.image {
                    div { class: "w-32 h-32 mx-auto mb-8 bg-blue-100 rounded-full overflow-hidden",
                        img {
                            src: "{image.source}",
                            alt: "{image.alt}",
                            class: "w-full h-full object-cover",
                        }
                    }
                }
                h2 { class: "text-4xl md:text-5xl font-bold mb-8 text-balance text-slate-900",
                    "{contact.heading}"
                }
                p { class: "text-xl text-slate-600 mb-12 text-pretty", "{contact.message}" }
                if !contact.offers.is_empty() {
                    div { class: "grid md:grid-cols-3 gap-8 mb-12",
                        for offer in contact.offers.iter() {
                            OfferCard { key: "{offer.title}", offer: offer.clone() }
                        }
                    }
                }
                LinkButton {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Large,
                    href: contact.cta_href.clone(),
                    "{contact.cta_label}"
                }
            }
        }
    }
}

#[component]
fn OfferCard(offer: ContactOffer) -> Element {
    rsx! {
        div { class: "p-6 text-center bg-white border border-slate-200 rounded-xl shadow-lg",
            if let Some(image) = &offer.image {
                div { class: "w-16 h-16 mx-auto mb-4 bg-blue-100 rounded-full overflow-hidden",
                    img {
                        src: "{image.source}",
                        alt: "{image.alt}",
                        class: "w-full h-full object-cover",
                    }
                }
            }
            h3 { class: "font-semibold mb-2 text-slate-900", "{offer.title}" }
            p { class: "text-sm text-slate-500", "{offer.subtitle}" }
        }
    }
}

#[component]
pub fn SiteFooter(footer: Footer) -> Element {
    rsx! {
        footer { class: "border-t border-slate-200 py-12 px-6 bg-slate-50",
            div { class: "container mx-auto max-w-6xl",
                div { class: "flex flex-col md:flex-row justify-between items-center gap-6",
                    div { class: "flex items-center gap-4",
                        if let Some(portrait) = &footer.portrait {
                            div { class: "w-20 h-20 bg-blue-100 rounded-full overflow-hidden",
                                img {
                                    src: "{portrait.source}",
                                    alt: "{portrait.alt}",
                                    class: "w-full h-full object-cover",
                                }
                            }
                        }
                        div {
                            h3 { class: "text-xl font-bold mb-2 text-slate-900", "{footer.name}" }
                            p { class: "text-slate-600", "{footer.role}" }
                        }
                    }
                    div { class: "text-center md:text-right",
                        if let Some(credential) = &footer.credential {
                            p { class: "text-sm text-slate-500 mb-2", "{credential}" }
                        }
                        p { class: "text-sm text-slate-400", "{footer.copyright}" }
                    }
                }
            }
        }
    }
}
