//! Form buttons

use dioxus::prelude::*;

/// Native button `type`, decides which form event the button fires
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HtmlType {
    Submit,
    Reset,
}

impl HtmlType {
    fn as_attr(self) -> &'static str {
        match self {
            HtmlType::Submit => "submit",
            HtmlType::Reset => "reset",
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled - commits the form
    Apply,
    /// Outlined - clears the form
    Clear,
}

/// Chromeless button - accessibility and base behavior without visual styling.
/// Used internally by Button and by the arrow toggle.
#[component]
pub fn ChromelessButton(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: r#type.unwrap_or("button"),
            aria_label: aria_label.as_deref(),
            aria_expanded: aria_expanded.map(|v| if v { "true" } else { "false" }),
            onclick: move |e| {
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Form button; the enclosing form's `onsubmit`/`onreset` does the work
#[component]
pub fn Button(title: &'static str, html_type: HtmlType, variant: ButtonVariant) -> Element {
    let base = "flex-1 px-6 py-4 rounded border-2 border-black text-lg font-extrabold uppercase cursor-pointer";

    let variant_class = match variant {
        ButtonVariant::Apply => "bg-black text-white",
        ButtonVariant::Clear => "bg-transparent text-black",
    };

    rsx! {
        ChromelessButton { class: Some(format!("{base} {variant_class}")), r#type: Some(html_type.as_attr()),
            "{title}"
        }
    }
}
