//! UI components

pub mod arrow_button;
pub mod article;
pub mod article_params_form;
pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text;

pub use arrow_button::ArrowButton;
pub use article::Article;
pub use article_params_form::ArticleParamsForm;
pub use button::{Button, ButtonVariant, ChromelessButton, HtmlType};
pub use radio_group::RadioGroup;
pub use select::Select;
pub use separator::Separator;
pub use text::Text;
