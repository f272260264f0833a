//! Full-page message shown when the content document can't be used

use dioxus::prelude::*;

#[component]
pub fn ContentErrorView(message: String) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-slate-100 px-6",
            div {
                class: "max-w-xl bg-red-50 border border-red-300 text-red-900 px-6 py-4 rounded-lg shadow",
                role: "alert",
                h1 { class: "text-lg font-semibold mb-2", "This page couldn't be loaded" }
                p { class: "text-sm font-mono break-words", "{message}" }
            }
        }
    }
}
