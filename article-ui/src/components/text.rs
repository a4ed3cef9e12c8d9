use dioxus::prelude::*;

/// Styled text run
#[component]
pub fn Text(
    #[props(default = 18)] size: u16,
    #[props(default = 400)] weight: u16,
    #[props(default)] uppercase: bool,
    children: Element,
) -> Element {
    let case_class = if uppercase { "uppercase" } else { "" };

    rsx! {
        span {
            class: "leading-tight {case_class}",
            style: "font-size: {size}px; font-weight: {weight};",
            {children}
        }
    }
}
