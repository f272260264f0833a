//! Full-screen image overlay
//!
//! Pure view: every click is reported as a `ViewerInput` and the owner decides
//! what it means. Only rendered while an image is open, so nothing in here
//! can intercept input when the viewer is closed.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use dioxus::prelude::*;
use folio_common::{ImageItem, ViewerInput};

/// "N / total" counter text
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

#[component]
pub fn LightboxView(
    item: ImageItem,
    /// Position of `item` in its gallery
    index: usize,
    total: usize,
    /// Show next/previous controls and the counter
    #[props(default = true)]
    show_navigation: bool,
    on_input: EventHandler<ViewerInput>,
) -> Element {
    let alt = item.alt_or_placeholder(index);
    let src = item.source.clone();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/90 flex items-center justify-center z-50",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{alt}",
            "data-testid": "lightbox",
            onclick: move |_| on_input.call(ViewerInput::Backdrop),

            button {
                r#type: "button",
                class: "absolute top-6 right-6 text-white hover:text-gray-300 transition-colors z-10",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_input.call(ViewerInput::CloseControl);
                },
                XIcon { class: "w-8 h-8" }
            }

            if show_navigation {
                div { class: "absolute top-6 left-6 text-gray-400 text-sm",
                    {counter_label(index, total)}
                }

                button {
                    r#type: "button",
                    class: "absolute left-6 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                    aria_label: "Previous image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_input.call(ViewerInput::PreviousControl);
                    },
                    ChevronLeftIcon { class: "w-8 h-8 text-white -translate-x-0.5" }
                }

                button {
                    r#type: "button",
                    class: "absolute right-6 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                    aria_label: "Next image",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_input.call(ViewerInput::NextControl);
                    },
                    ChevronRightIcon { class: "w-8 h-8 text-white translate-x-0.5" }
                }
            }

            div { class: "flex flex-col items-center max-w-[90vw]",
                // Clicks on the image itself must not reach the backdrop
                img {
                    src: "{src}",
                    alt: "{alt}",
                    class: "max-w-[90vw] max-h-[80vh] object-contain rounded-lg shadow-2xl",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_input.call(ViewerInput::Image);
                    },
                }
                p { class: "mt-4 text-gray-300 text-sm", "{alt}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_one_based() {
        assert_eq!(counter_label(0, 9), "1 / 9");
        assert_eq!(counter_label(8, 9), "9 / 9");
    }
}
