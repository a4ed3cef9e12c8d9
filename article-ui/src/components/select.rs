//! Custom select over a registry option list
//!
//! Controlled: the parent owns the selected option. The only local state is
//! whether the dropdown is open; it closes on choice, on a pointer-down
//! outside both the trigger and the dropdown, or on Escape.
//!
//! ```ignore
//! Select {
//!     title: "Font",
//!     selected: draft.font_family_option,
//!     options: FONT_FAMILY_OPTIONS,
//!     onchange: move |option| { ... },
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use article_common::ArticleOption;
use dioxus::prelude::*;

use crate::dismiss::use_dismiss;

/// Counter for generating unique select root IDs
static SELECT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Element ids that make up an open select: the root and its dropdown.
///
/// The dropdown is absolutely positioned below the root, so it lies outside
/// the root's rectangle and must be its own region.
fn region_ids(root_id: &str) -> [String; 2] {
    [root_id.to_string(), dropdown_id(root_id)]
}

fn dropdown_id(root_id: &str) -> String {
    format!("{root_id}-options")
}

#[component]
pub fn Select(
    title: &'static str,
    selected: &'static ArticleOption,
    options: &'static [ArticleOption],
    onchange: EventHandler<&'static ArticleOption>,
) -> Element {
    let mut is_open = use_signal(|| false);

    let root_id = use_hook(|| {
        let id = SELECT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("select-{}", id)
    });
    let options_id = dropdown_id(&root_id);

    use_dismiss(is_open(), region_ids(&root_id).to_vec(), move || {
        is_open.set(false)
    });

    rsx! {
        div { class: "relative flex flex-col gap-2", id: "{root_id}",
            span { class: "text-xs font-extrabold uppercase", "{title}" }
            button {
                r#type: "button",
                class: "flex items-center gap-2 px-4 py-3 border rounded bg-white text-left cursor-pointer {trigger_class(is_open())}",
                aria_haspopup: "listbox",
                aria_expanded: if is_open() { "true" } else { "false" },
                onclick: move |_| is_open.set(!is_open()),
                OptionSwatch { option: selected }
                span { class: "{selected.class_name}", "{selected.title}" }
            }
            if is_open() {
                ul {
                    id: "{options_id}",
                    class: "absolute top-full left-0 right-0 z-10 mt-1 py-1 list-none border border-black rounded bg-white",
                    role: "listbox",
                    for option in options.iter() {
                        li {
                            key: "{option.value}",
                            role: "option",
                            aria_selected: if std::ptr::eq(option, selected) { "true" } else { "false" },
                            class: "flex items-center gap-2 px-4 py-2 cursor-pointer hover:bg-gray-100 {option.class_name} {option_class(std::ptr::eq(option, selected))}",
                            onclick: move |e: MouseEvent| {
                                e.stop_propagation();
                                onchange.call(option);
                                is_open.set(false);
                            },
                            OptionSwatch { option }
                            "{option.title}"
                        }
                    }
                }
            }
        }
    }
}

/// Color or width marker for options that carry one
#[component]
fn OptionSwatch(option: &'static ArticleOption) -> Element {
    let Some(swatch) = option.option_class_name else {
        return rsx! {};
    };

    rsx! {
        span {
            class: "swatch inline-block w-4 h-4 rounded-full border border-gray-300 {swatch}",
            style: "--swatch: {option.value};",
        }
    }
}

fn trigger_class(is_open: bool) -> &'static str {
    if is_open {
        "border-indigo-600"
    } else {
        "border-black"
    }
}

fn option_class(is_selected: bool) -> &'static str {
    if is_selected {
        "bg-gray-100"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_root_and_dropdown() {
        let ids = region_ids("select-7");
        assert_eq!(ids, ["select-7".to_string(), "select-7-options".to_string()]);
        assert_eq!(ids[1], dropdown_id("select-7"));
    }

    #[test]
    fn dropdown_ids_are_distinct_per_select() {
        assert_ne!(dropdown_id("select-1"), dropdown_id("select-2"));
    }
}
