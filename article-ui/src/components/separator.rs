use dioxus::prelude::*;

#[component]
pub fn Separator() -> Element {
    rsx! {
        div { class: "h-px bg-gray-200", role: "separator" }
    }
}
