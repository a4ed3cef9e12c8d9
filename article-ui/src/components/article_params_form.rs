//! Collapsible settings panel for the article preview
//!
//! Edits go into a local draft; only Apply hands the draft to the parent.
//! Reset asks the parent to reset and the panel re-syncs from whatever the
//! parent commits.

use article_common::{ArticleField, ArticleOption, ArticleState, CommittedArticle, PanelState};
use dioxus::prelude::*;
use tracing::debug;

use super::arrow_button::ArrowButton;
use super::button::{Button, ButtonVariant, HtmlType};
use super::radio_group::RadioGroup;
use super::select::Select;
use super::separator::Separator;
use super::text::Text;
use crate::dismiss::use_dismiss;

const PANEL_ID: &str = "article-params-panel";
const TOGGLE_ID: &str = "article-params-toggle";

#[component]
pub fn ArticleParamsForm(
    /// The parent's committed tuple
    initial_params: CommittedArticle,
    on_submit: EventHandler<ArticleState>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut panel = use_signal(|| PanelState::new(initial_params.state));

    // Every commit from the parent replaces the draft
    use_effect(use_reactive((&initial_params,), move |(params,)| {
        panel.write().sync(params.state);
    }));

    let is_open = panel.read().is_open();
    let draft = *panel.read().draft();

    use_dismiss(
        is_open,
        vec![PANEL_ID.to_string(), TOGGLE_ID.to_string()],
        move || {
            debug!("Dismissing article settings");
            panel.write().dismiss();
        },
    );

    let change = move |field: ArticleField| {
        move |option: &'static ArticleOption| panel.write().change(field, option)
    };

    rsx! {
        ArrowButton {
            id: TOGGLE_ID.to_string(),
            is_open,
            onclick: move |_| panel.write().toggle(),
        }
        aside {
            id: PANEL_ID,
            class: "fixed top-0 left-0 z-10 w-[616px] h-screen bg-white shadow-xl transition-transform duration-500 {panel_class(is_open)}",
            "data-open": if is_open { "true" } else { "false" },
            form {
                class: "flex flex-col justify-between h-full p-12 text-black",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let submitted = panel.write().apply();
                    debug!("Applying article settings: {:?}", submitted.css_variables());
                    on_submit.call(submitted);
                },
                onreset: move |e: FormEvent| {
                    e.prevent_default();
                    debug!("Resetting article settings");
                    panel.write().reset();
                    on_reset.call(());
                },
                div { class: "flex flex-col gap-8",
                    Text { size: 31, weight: 800, uppercase: true, "Set parameters" }
                    Select {
                        title: ArticleField::FontFamily.label(),
                        selected: draft.font_family_option,
                        options: ArticleField::FontFamily.options(),
                        onchange: change(ArticleField::FontFamily),
                    }
                    RadioGroup {
                        title: ArticleField::FontSize.label(),
                        name: "font-size",
                        selected: draft.font_size_option,
                        options: ArticleField::FontSize.options(),
                        onchange: change(ArticleField::FontSize),
                    }
                    Select {
                        title: ArticleField::FontColor.label(),
                        selected: draft.font_color,
                        options: ArticleField::FontColor.options(),
                        onchange: change(ArticleField::FontColor),
                    }
                    Separator {}
                    Select {
                        title: ArticleField::BackgroundColor.label(),
                        selected: draft.background_color,
                        options: ArticleField::BackgroundColor.options(),
                        onchange: change(ArticleField::BackgroundColor),
                    }
                    Select {
                        title: ArticleField::ContentWidth.label(),
                        selected: draft.content_width,
                        options: ArticleField::ContentWidth.options(),
                        onchange: change(ArticleField::ContentWidth),
                    }
                }
                div { class: "flex justify-between gap-4",
                    Button {
                        title: "Reset",
                        html_type: HtmlType::Reset,
                        variant: ButtonVariant::Clear,
                    }
                    Button {
                        title: "Apply",
                        html_type: HtmlType::Submit,
                        variant: ButtonVariant::Apply,
                    }
                }
            }
        }
    }
}

fn panel_class(is_open: bool) -> &'static str {
    if is_open {
        "translate-x-0"
    } else {
        "-translate-x-full"
    }
}
