//! article-common - Pure presentation-settings logic
//!
//! Option registry, selection tuple, committed state, the settings panel
//! state machine and the dismiss rule. No UI and no I/O, shared by the
//! component crate and the web launcher.

mod article_state;
mod dismiss;
mod options;
mod panel_state;

pub use article_state::{ArticleField, ArticleState, ArticleStateError, CommittedArticle};
pub use dismiss::{
    Bounds, DismissGuard, Interaction, ListenerChange, ListenerSlot, Point, SurfaceId, SurfaceStack,
    CANCEL_KEY,
};
pub use options::{
    default_article_state, find_option, ArticleOption, BACKGROUND_COLORS, CONTENT_WIDTHS,
    FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
pub use panel_state::PanelState;
