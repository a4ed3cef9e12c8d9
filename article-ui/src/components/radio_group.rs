//! Radio group - a row of native radio inputs where exactly one is checked

use article_common::{find_option, ArticleOption};
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn RadioGroup(
    title: &'static str,
    /// Input group name shared by the radios
    name: &'static str,
    selected: &'static ArticleOption,
    options: &'static [ArticleOption],
    onchange: EventHandler<&'static ArticleOption>,
) -> Element {
    rsx! {
        fieldset { class: "m-0 p-0 border-0",
            legend { class: "text-xs font-extrabold uppercase", "{title}" }
            div { class: "flex gap-3 mt-2",
                for option in options.iter() {
                    label { key: "{option.value}", class: "relative cursor-pointer {option.class_name}",
                        input {
                            r#type: "radio",
                            class: "peer absolute opacity-0",
                            name: "{name}",
                            value: "{option.value}",
                            checked: std::ptr::eq(option, selected),
                            onchange: move |e: FormEvent| {
                                match find_option(options, &e.value()) {
                                    Ok(chosen) => onchange.call(chosen),
                                    Err(err) => warn!("Ignoring radio change: {}", err),
                                }
                            },
                        }
                        span { class: "inline-block px-4 py-2 border border-black rounded peer-checked:bg-black peer-checked:text-white",
                            "{option.title}"
                        }
                    }
                }
            }
        }
    }
}
