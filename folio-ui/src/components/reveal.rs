//! Page section that fades in the first time it scrolls into view

use crate::wasm_utils::RevealObserver;
use dioxus::prelude::*;
use folio_common::SectionId;

/// Class added once a section has been seen. Never removed.
pub const REVEALED_CLASS: &str = "animate-fade-in";

/// Classes for a section, given its base classes and reveal state.
///
/// A revealed section drops `reveal-pending`, so once the fade-in finishes
/// no opacity rule remains in effect on it.
pub fn section_class(base: &str, reveal: bool, revealed: bool) -> String {
    match (reveal, revealed) {
        (true, true) => format!("{base} {REVEALED_CLASS}"),
        (true, false) => format!("{base} reveal-pending"),
        (false, _) => base.to_string(),
    }
}

/// `<section>` with the id of `id`, observed for scroll reveal when `reveal` is set.
#[component]
pub fn RevealSection(
    id: SectionId,
    #[props(default)] class: String,
    /// Whether to fade the section in on first sight
    reveal: bool,
    children: Element,
) -> Element {
    let mut revealed = use_signal(|| false);
    let mut observer: Signal<Option<RevealObserver>> = use_signal(|| None);

    let section_classes = section_class(&class, reveal, revealed());

    rsx! {
        section {
            id: id.dom_id(),
            class: "{section_classes}",
            onmounted: move |evt| {
                if !reveal || revealed() {
                    return;
                }
                let handle = RevealObserver::observe(
                    &evt.data(),
                    move || {
                        revealed.set(true);
                    },
                );
                if handle.is_none() {
                    // No observer support: show the section rather than keep it hidden
                    revealed.set(true);
                }
                observer.set(handle);
            },
            {children}
        }
    }
}
