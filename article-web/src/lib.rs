//! Application root for the article customizer
//!
//! Owns the committed presentation tuple, exposes it to the article preview
//! as CSS variables and wires the settings panel's callbacks back into it.

use article_common::{ArticleState, CommittedArticle};
use article_ui::{Article, ArticleParamsForm};
use dioxus::prelude::*;
use tracing::debug;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut committed = use_signal(CommittedArticle::default);

    let handle_submit = move |state: ArticleState| {
        debug!("Committing article settings");
        committed.write().submit(state);
    };

    let handle_reset = move |_: ()| {
        debug!("Resetting article settings to defaults");
        committed.write().reset();
    };

    let current = committed();
    let style = current.state.style_attribute();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        main { class: "main", style: "{style}",
            ArticleParamsForm {
                initial_params: current,
                on_submit: handle_submit,
                on_reset: handle_reset,
            }
            Article {}
        }
    }
}
