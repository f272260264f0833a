//! folio web - the portfolio site as a single-page web app

pub mod content;

use dioxus::prelude::*;
use folio_ui::{ContentErrorView, PortfolioView};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let loaded = use_hook(|| content::load_bundled().map_err(|e| e.to_string()));

    let page = match loaded {
        Ok(content) => rsx! {
            document::Title { "{content.site.title}" }
            PortfolioView { content: content.clone() }
        },
        Err(message) => rsx! {
            ContentErrorView { message }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {page}
    }
}
