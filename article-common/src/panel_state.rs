//! Settings panel state: a draft of the selection tuple plus the open flag
//!
//! The draft only reaches the application root through [`PanelState::apply`].
//! Reset semantics belong to the root; the panel closes and later picks up
//! whatever the root committed through [`PanelState::sync`].

use crate::article_state::{ArticleField, ArticleState};
use crate::options::ArticleOption;

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    draft: ArticleState,
    /// Last committed tuple seen from the root
    basis: ArticleState,
    is_open: bool,
}

impl PanelState {
    pub fn new(initial: ArticleState) -> Self {
        Self {
            draft: initial,
            basis: initial,
            is_open: false,
        }
    }

    pub fn draft(&self) -> &ArticleState {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Replace one draft field. The panel stays open and the root is not told.
    pub fn change(&mut self, field: ArticleField, option: &'static ArticleOption) {
        self.draft.set(field, option);
    }

    /// Close the panel and hand back the full draft for the root to commit.
    pub fn apply(&mut self) -> ArticleState {
        let submitted = self.draft;
        self.is_open = false;
        submitted
    }

    /// Close the panel; the caller asks the root to reset.
    pub fn reset(&mut self) {
        self.is_open = false;
    }

    /// Close without applying. Pending edits are dropped.
    pub fn dismiss(&mut self) {
        self.is_open = false;
        self.draft = self.basis;
    }

    /// The root committed a new tuple; replace the draft wholesale.
    pub fn sync(&mut self, committed: ArticleState) {
        self.basis = committed;
        self.draft = committed;
    }
}
