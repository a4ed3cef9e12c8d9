//! Arrow toggle that opens and closes the settings panel

use dioxus::prelude::*;

use super::button::ChromelessButton;

#[component]
pub fn ArrowButton(id: String, is_open: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base = "fixed top-6 z-20 flex items-center justify-center w-10 h-10 rounded-full bg-black text-white cursor-pointer transition-all duration-500";
    let (container_class, arrow_class) = if is_open {
        (format!("{base} left-[640px]"), "w-5 h-5 rotate-180 transition-transform")
    } else {
        (format!("{base} left-6"), "w-5 h-5 transition-transform")
    };

    rsx! {
        ChromelessButton {
            id: Some(id),
            class: Some(container_class),
            aria_label: Some("Open/close article settings".to_string()),
            aria_expanded: Some(is_open),
            onclick: Some(onclick),
            svg {
                class: "{arrow_class}",
                xmlns: "http://www.w3.org/2000/svg",
                fill: "none",
                view_box: "0 0 20 20",
                path {
                    stroke: "currentColor",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "1.5",
                    d: "m8 6 4 4-4 4",
                }
            }
        }
    }
}
