//! Fixed top bar with a slide-out section menu

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{MenuIcon, XIcon};
use dioxus::prelude::*;
use folio_common::{MenuState, NavLink, SectionId};

/// Transform class for the off-canvas panel
pub fn menu_panel_class(open: bool) -> &'static str {
    if open {
        "translate-x-0"
    } else {
        "translate-x-full"
    }
}

/// Navigation bar and its off-canvas menu.
///
/// Menu state is local to this component; picking a link always closes the
/// menu before `on_navigate` fires.
#[component]
pub fn NavigationBar(title: String, links: Vec<NavLink>, on_navigate: EventHandler<SectionId>) -> Element {
    let mut menu = use_signal(MenuState::default);
    let is_open = menu.read().is_open();
    let panel_class = menu_panel_class(is_open);

    rsx! {
        nav { class: "fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-md border-b border-gray-200 shadow-sm",
            div { class: "container mx-auto px-6 py-4 flex justify-between items-center",
                h1 { class: "text-xl font-bold tracking-tight text-slate-900", "{title}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: Some("Open menu".to_string()),
                    onclick: move |_| menu.write().toggle(),
                    MenuIcon {}
                }
            }
        }

        div {
            class: "fixed top-0 right-0 h-full w-full md:w-96 bg-blue-100 border-l border-slate-200 z-[60] transform {panel_class} transition-transform duration-500 ease-in-out shadow-2xl",
            aria_hidden: if is_open { "false" } else { "true" },
            div { class: "p-8 pt-20",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: Some("absolute top-4 right-4".to_string()),
                    aria_label: Some("Close menu".to_string()),
                    onclick: move |_| menu.write().close(),
                    XIcon {}
                }
                nav { class: "space-y-6",
                    for link in links.iter() {
                        {
                            let target = link.target;
                            rsx! {
                                button {
                                    key: "{target}",
                                    r#type: "button",
                                    class: "block text-2xl font-light hover:text-blue-400 transition-colors duration-300 text-left w-full text-slate-800",
                                    onclick: move |_| {
                                        let target = menu.write().navigate(target);
                                        on_navigate.call(target);
                                    },
                                    "{link.label}"
                                }
                            }
                        }
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
    fn test_panel_slides_in_only_when_open() {
        assert_eq!(menu_panel_class(true), "translate-x-0");
        assert_eq!(menu_panel_class(false), "translate-x-full");
    }
}
