//! Selection tuple and the committed state owned by the application root

use std::fmt;

use crate::options::{
    default_article_state, ArticleOption, BACKGROUND_COLORS, CONTENT_WIDTHS, FONT_COLORS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleStateError {
    #[error("unknown option value: {value}")]
    UnknownOption { value: String },
}

/// One presentation axis of the article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleField {
    pub const ALL: [ArticleField; 5] = [
        ArticleField::FontFamily,
        ArticleField::FontSize,
        ArticleField::FontColor,
        ArticleField::BackgroundColor,
        ArticleField::ContentWidth,
    ];

    /// Registry list this field draws from
    pub fn options(self) -> &'static [ArticleOption] {
        match self {
            ArticleField::FontFamily => FONT_FAMILY_OPTIONS,
            ArticleField::FontSize => FONT_SIZE_OPTIONS,
            ArticleField::FontColor => FONT_COLORS,
            ArticleField::BackgroundColor => BACKGROUND_COLORS,
            ArticleField::ContentWidth => CONTENT_WIDTHS,
        }
    }

    /// Picker label
    pub fn label(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "Font",
            ArticleField::FontSize => "Font size",
            ArticleField::FontColor => "Font color",
            ArticleField::BackgroundColor => "Background color",
            ArticleField::ContentWidth => "Content width",
        }
    }

    /// CSS custom property driven by this field
    pub fn css_variable(self) -> &'static str {
        match self {
            ArticleField::FontFamily => "--font-family",
            ArticleField::FontSize => "--font-size",
            ArticleField::FontColor => "--font-color",
            ArticleField::BackgroundColor => "--bg-color",
            ArticleField::ContentWidth => "--container-width",
        }
    }

    pub fn contains(self, option: &ArticleOption) -> bool {
        self.options().iter().any(|o| std::ptr::eq(o, option))
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete presentation configuration.
///
/// Every field points into the registry list of its axis, so a tuple is
/// always valid. Equality compares the referenced options by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleState {
    pub font_family_option: &'static ArticleOption,
    pub font_size_option: &'static ArticleOption,
    pub font_color: &'static ArticleOption,
    pub background_color: &'static ArticleOption,
    pub content_width: &'static ArticleOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        default_article_state()
    }
}

impl ArticleState {
    pub fn get(&self, field: ArticleField) -> &'static ArticleOption {
        match field {
            ArticleField::FontFamily => self.font_family_option,
            ArticleField::FontSize => self.font_size_option,
            ArticleField::FontColor => self.font_color,
            ArticleField::BackgroundColor => self.background_color,
            ArticleField::ContentWidth => self.content_width,
        }
    }

    /// Replace exactly one field.
    pub fn set(&mut self, field: ArticleField, option: &'static ArticleOption) {
        debug_assert!(
            field.contains(option),
            "{} is not a {} option",
            option.value,
            field
        );
        let slot = match field {
            ArticleField::FontFamily => &mut self.font_family_option,
            ArticleField::FontSize => &mut self.font_size_option,
            ArticleField::FontColor => &mut self.font_color,
            ArticleField::BackgroundColor => &mut self.background_color,
            ArticleField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    pub fn with(mut self, field: ArticleField, option: &'static ArticleOption) -> Self {
        self.set(field, option);
        self
    }

    /// The five style variables consumed by the article preview
    pub fn css_variables(&self) -> [(&'static str, &'static str); 5] {
        ArticleField::ALL.map(|field| (field.css_variable(), self.get(field).value))
    }

    /// Style variables as an inline `style` attribute value
    pub fn style_attribute(&self) -> String {
        self.css_variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The application root's authoritative tuple.
///
/// `revision` changes on every submit or reset, even when the values stay
/// the same, so consumers can tell a new commit from a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommittedArticle {
    pub state: ArticleState,
    pub revision: u64,
}

impl CommittedArticle {
    pub fn submit(&mut self, state: ArticleState) {
        self.state = state;
        self.revision += 1;
    }

    pub fn reset(&mut self) {
        self.submit(default_article_state());
    }
}
