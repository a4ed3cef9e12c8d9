//! article-ui - Components for the article customizer
//!
//! The settings panel, its primitive widgets, the article preview and the
//! browser interop they need. State logic lives in `article-common`.

pub mod components;
pub mod dismiss;
pub mod wasm_utils;

pub use components::*;
pub use dismiss::use_dismiss;
