use crate::article_state::{ArticleState, ArticleStateError};

/// A selectable presentation value
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ArticleOption {
    /// Display label shown by pickers
    pub title: &'static str,
    /// CSS-consumable value
    pub value: &'static str,
    /// Preview class for this option
    pub class_name: &'static str,
    /// Swatch class used inside pickers (colors, widths)
    pub option_class_name: Option<&'static str>,
}

impl ArticleOption {
    const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            title,
            value,
            class_name,
            option_class_name: None,
        }
    }

    const fn with_swatch(mut self, option_class_name: &'static str) -> Self {
        self.option_class_name = Some(option_class_name);
        self
    }
}

pub static FONT_FAMILY_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::new("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::new("Days One", "Days One", "days-one"),
    ArticleOption::new("Merriweather", "Merriweather", "merriweather"),
];

pub static FONT_SIZE_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("18", "18px", "font-size-18"),
    ArticleOption::new("24", "24px", "font-size-24"),
    ArticleOption::new("38", "38px", "font-size-38"),
];

pub static FONT_COLORS: &[ArticleOption] = &[
    ArticleOption::new("Black", "#000000", "font-color-black").with_swatch("option-black"),
    ArticleOption::new("White", "#FFFFFF", "font-color-white").with_swatch("option-white"),
    ArticleOption::new("Gray", "#C4C4C4", "font-color-gray").with_swatch("option-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "font-color-pink").with_swatch("option-pink"),
    ArticleOption::new("Fuchsia", "#FD24AF", "font-color-fuchsia").with_swatch("option-fuchsia"),
    ArticleOption::new("Yellow", "#FFC802", "font-color-yellow").with_swatch("option-yellow"),
    ArticleOption::new("Green", "#80D994", "font-color-green").with_swatch("option-green"),
    ArticleOption::new("Blue", "#6FC1FD", "font-color-blue").with_swatch("option-blue"),
    ArticleOption::new("Purple", "#5F3ECC", "font-color-purple").with_swatch("option-purple"),
];

pub static BACKGROUND_COLORS: &[ArticleOption] = &[
    ArticleOption::new("White", "#FFFFFF", "background-white").with_swatch("option-white"),
    ArticleOption::new("Black", "#000000", "background-black").with_swatch("option-black"),
    ArticleOption::new("Gray", "#C4C4C4", "background-gray").with_swatch("option-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "background-pink").with_swatch("option-pink"),
    ArticleOption::new("Fuchsia", "#FD24AF", "background-fuchsia").with_swatch("option-fuchsia"),
    ArticleOption::new("Yellow", "#FFC802", "background-yellow").with_swatch("option-yellow"),
    ArticleOption::new("Green", "#80D994", "background-green").with_swatch("option-green"),
    ArticleOption::new("Blue", "#6FC1FD", "background-blue").with_swatch("option-blue"),
    ArticleOption::new("Purple", "#5F3ECC", "background-purple").with_swatch("option-purple"),
];

pub static CONTENT_WIDTHS: &[ArticleOption] = &[
    ArticleOption::new("Narrow", "696px", "width-narrow").with_swatch("option-narrow"),
    ArticleOption::new("Medium", "948px", "width-medium").with_swatch("option-medium"),
    ArticleOption::new("Wide", "1394px", "width-wide").with_swatch("option-wide"),
];

/// The tuple the application starts with and returns to on reset:
/// the first entry of every registry list.
pub fn default_article_state() -> ArticleState {
    ArticleState {
        font_family_option: &FONT_FAMILY_OPTIONS[0],
        font_size_option: &FONT_SIZE_OPTIONS[0],
        font_color: &FONT_COLORS[0],
        background_color: &BACKGROUND_COLORS[0],
        content_width: &CONTENT_WIDTHS[0],
    }
}

/// Resolve a value reported by a native input back to its registry entry.
pub fn find_option(
    options: &'static [ArticleOption],
    value: &str,
) -> Result<&'static ArticleOption, ArticleStateError> {
    options
        .iter()
        .find(|option| option.value == value)
        .ok_or_else(|| ArticleStateError::UnknownOption {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_documented_values() {
        let state = default_article_state();
        assert_eq!(state.font_family_option.value, "Open Sans");
        assert_eq!(state.font_size_option.title, "18");
        assert_eq!(state.font_size_option.value, "18px");
        assert_eq!(state.font_color.value, "#000000");
        assert_eq!(state.background_color.value, "#FFFFFF");
        assert_eq!(state.content_width.value, "696px");
    }

    #[test]
    fn registry_values_are_unique_per_list() {
        for list in [
            FONT_FAMILY_OPTIONS,
            FONT_SIZE_OPTIONS,
            FONT_COLORS,
            BACKGROUND_COLORS,
            CONTENT_WIDTHS,
        ] {
            assert!(!list.is_empty());
            for (i, option) in list.iter().enumerate() {
                assert!(
                    list[i + 1..].iter().all(|other| other.value != option.value),
                    "duplicate value {}",
                    option.value
                );
            }
        }
    }

    #[test]
    fn swatches_only_on_colors_and_widths() {
        assert!(FONT_FAMILY_OPTIONS
            .iter()
            .all(|o| o.option_class_name.is_none()));
        assert!(FONT_COLORS.iter().all(|o| o.option_class_name.is_some()));
        assert!(CONTENT_WIDTHS.iter().all(|o| o.option_class_name.is_some()));
    }

    // Option classes sit next to utility classes on the same elements
    #[test]
    fn option_classes_do_not_shadow_utilities() {
        for option in FONT_COLORS.iter().chain(BACKGROUND_COLORS) {
            assert!(!option.class_name.starts_with("bg-"), "{}", option.class_name);
            assert!(!option.class_name.starts_with("text-"), "{}", option.class_name);
            assert_ne!(option.class_name, "font-black");
        }
    }

    #[test]
    fn find_option_returns_registry_entry() {
        let option = find_option(FONT_SIZE_OPTIONS, "24px").unwrap();
        assert!(std::ptr::eq(option, &FONT_SIZE_OPTIONS[1]));
    }

    #[test]
    fn find_option_rejects_unknown_value() {
        let err = find_option(FONT_SIZE_OPTIONS, "19px").unwrap_err();
        assert_eq!(
            err,
            ArticleStateError::UnknownOption {
                value: "19px".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown option value: 19px");
    }
}
