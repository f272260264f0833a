//! Buttons

use dioxus::prelude::*;

/// Unstyled button carrying the accessibility attributes
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            aria_label: aria_label.as_deref(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Blue background - the contact call to action
    Primary,
    /// Slate background - the hero call to action
    Muted,
    /// No background, for icon buttons in the navigation
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Large,
    /// Square, sized for a single icon
    Icon,
}

/// Tailwind classes for a variant and size
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let base = "inline-flex items-center justify-center rounded-md transition-colors";
    let size_class = match size {
        ButtonSize::Large => "px-8 py-3 text-lg",
        ButtonSize::Icon => "w-10 h-10",
    };
    let variant_class = match variant {
        ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white shadow-lg",
        ButtonVariant::Muted => "bg-gray-600 hover:bg-blue-700 text-white shadow-lg",
        ButtonVariant::Ghost => "text-slate-700 hover:bg-slate-100",
    };
    format!("{base} {size_class} {variant_class}")
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("{} {extra}", button_class(variant, size)),
        None => button_class(variant, size),
    };

    rsx! {
        ChromelessButton { class: Some(computed_class), aria_label, onclick, {children} }
    }
}

/// Anchor styled like a `Button`, for `tel:` and `mailto:` links
#[component]
pub fn LinkButton(variant: ButtonVariant, size: ButtonSize, href: String, children: Element) -> Element {
    let class = button_class(variant, size);
    rsx! {
        a { class: "{class}", href: "{href}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_combines_size_and_variant() {
        let class = button_class(ButtonVariant::Primary, ButtonSize::Large);
        assert!(class.contains("px-8 py-3"));
        assert!(class.contains("bg-blue-600"));

        let icon = button_class(ButtonVariant::Ghost, ButtonSize::Icon);
        assert!(icon.contains("w-10 h-10"));
        assert!(!icon.contains("bg-blue-600"));
    }
}
