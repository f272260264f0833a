//! The whole one-page site, assembled from content

use crate::components::about::AboutSection;
use crate::components::awards::{AwardsSection, InternationalAwardsSection};
use crate::components::contact::{ContactSection, SiteFooter};
use crate::components::gallery_section::GallerySectionView;
use crate::components::hero::HeroSection;
use crate::components::nav_menu::NavigationBar;
use crate::wasm_utils::scroll_to_element;
use dioxus::prelude::*;
use folio_common::{PortfolioContent, SectionId};

#[component]
pub fn PortfolioView(content: PortfolioContent) -> Element {
    let reveal = content.ambient.scroll_reveal;

    let on_navigate = move |target: SectionId| {
        tracing::debug!("Scrolling to {}", target);
        scroll_to_element(target.dom_id());
    };

    rsx! {
        div { class: "min-h-screen bg-slate-100 text-slate-900",
            NavigationBar {
                title: content.site.title.clone(),
                links: content.navigation.clone(),
                on_navigate,
            }
            HeroSection {
                hero: content.hero.clone(),
                ambient: content.ambient,
                on_navigate,
            }
            AboutSection { about: content.about.clone(), reveal }
            if let Some(international) = &content.international_awards {
                InternationalAwardsSection { section: international.clone(), reveal }
            }
            AwardsSection { section: content.awards.clone(), reveal }
            GallerySectionView { gallery: content.gallery.clone(), reveal }
            ContactSection { contact: content.contact.clone(), reveal }
            SiteFooter { footer: content.footer.clone() }
        }
    }
}
