use super::*;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully resolved button presentation for one (variant, size, disabled) combination.
pub struct ButtonStyle {
    /// Vertical padding.
    pub padding_y: String,
    /// Horizontal padding.
    pub padding_x: String,
    /// Label font size.
    pub font_size: String,
    /// Minimum rendered height.
    pub min_height: String,
    /// Fill color.
    pub background: String,
    /// Text and spinner color.
    pub foreground: String,
    /// Border width.
    pub border_width: String,
    /// Border line style keyword.
    pub border_style: &'static str,
    /// Border color.
    pub border_color: String,
    /// Corner radius.
    pub border_radius: String,
    /// Pointer cursor keyword.
    pub cursor: &'static str,
}

impl ButtonStyle {
    /// Resolves every style property through `theme`.
    ///
    /// Total over the variant and size enums: each combination yields a value for every field.
    pub fn resolve(
        theme: &Theme,
        variant: ButtonVariant,
        size: ButtonSize,
        effective_disabled: bool,
    ) -> Self {
        let size_token = |part: &str| theme.resolve(&format!("button-size-{}-{part}", size.token()));
        let state = if effective_disabled {
            "disabled"
        } else {
            "default"
        };
        let background = theme.resolve(&format!(
            "button-{}-background-{state}",
            variant.token()
        ));
        let foreground = theme.resolve(&format!(
            "button-{}-foreground-{state}",
            variant.token()
        ));

        let (border_width, border_style, border_color) = match variant {
            ButtonVariant::Ghost => (
                theme.resolve("button-border-width-ghost"),
                "solid",
                theme.resolve(&format!("button-ghost-border-{state}")),
            ),
            ButtonVariant::Primary | ButtonVariant::Secondary | ButtonVariant::Danger => (
                theme.resolve("button-border-width-default"),
                "none",
                background.clone(),
            ),
        };

        Self {
            padding_y: size_token("padding-y"),
            padding_x: size_token("padding-x"),
            font_size: size_token("font-size"),
            min_height: size_token("min-height"),
            background,
            foreground,
            border_width,
            border_style,
            border_color,
            border_radius: theme.resolve("button-border-radius-default"),
            cursor: if effective_disabled {
                "not-allowed"
            } else {
                "pointer"
            },
        }
    }

    /// Serializes the style as an inline declaration list in a fixed property order.
    pub fn to_inline(&self) -> String {
        format!(
            "padding: {} {}; font-size: {}; min-height: {}; background-color: {}; color: {}; \
             border-width: {}; border-style: {}; border-color: {}; border-radius: {}; cursor: {};",
            self.padding_y,
            self.padding_x,
            self.font_size,
            self.min_height,
            self.background,
            self.foreground,
            self.border_width,
            self.border_style,
            self.border_color,
            self.border_radius,
            self.cursor,
        )
    }

    /// Inline style with the caller's declarations appended so they take precedence.
    pub fn to_inline_with(&self, caller_style: Option<&str>) -> String {
        let base = self.to_inline();
        match caller_style.map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
            _ => base,
        }
    }

    fn values(&self) -> [&str; 11] {
        [
            self.padding_y.as_str(),
            self.padding_x.as_str(),
            self.font_size.as_str(),
            self.min_height.as_str(),
            self.background.as_str(),
            self.foreground.as_str(),
            self.border_width.as_str(),
            self.border_style,
            self.border_color.as_str(),
            self.border_radius.as_str(),
            self.cursor,
        ]
    }

    /// Whether every property carries a value.
    pub fn is_complete(&self) -> bool {
        self.values().iter().all(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn all_combinations() -> impl Iterator<Item = (ButtonVariant, ButtonSize, bool)> {
        ButtonVariant::ALL.into_iter().flat_map(|variant| {
            ButtonSize::ALL.into_iter().flat_map(move |size| {
                [false, true]
                    .into_iter()
                    .map(move |disabled| (variant, size, disabled))
            })
        })
    }

    #[test]
    fn every_combination_resolves_a_complete_style() {
        let theme = Theme::default();
        let mut count = 0;
        for (variant, size, disabled) in all_combinations() {
            let style = ButtonStyle::resolve(&theme, variant, size, disabled);
            assert!(
                style.is_complete(),
                "{variant:?}/{size:?}/disabled={disabled} left a property empty: {style:?}"
            );
            count += 1;
        }
        assert_eq!(count, 24);
    }

    #[test]
    fn colors_and_dimensions_are_token_indirections() {
        let theme = Theme::default();
        for (variant, size, disabled) in all_combinations() {
            let style = ButtonStyle::resolve(&theme, variant, size, disabled);
            for value in [
                &style.padding_y,
                &style.padding_x,
                &style.font_size,
                &style.min_height,
                &style.background,
                &style.foreground,
                &style.border_width,
                &style.border_color,
                &style.border_radius,
            ] {
                assert!(value.starts_with("var(--button-"), "literal value {value}");
            }
        }
    }

    #[test]
    fn disabled_state_swaps_color_tokens_and_cursor() {
        let theme = Theme::default();
        let enabled = ButtonStyle::resolve(&theme, ButtonVariant::Danger, ButtonSize::Medium, false);
        let disabled = ButtonStyle::resolve(&theme, ButtonVariant::Danger, ButtonSize::Medium, true);

        assert_eq!(enabled.background, "var(--button-danger-background-default)");
        assert_eq!(disabled.background, "var(--button-danger-background-disabled)");
        assert_eq!(disabled.foreground, "var(--button-danger-foreground-disabled)");
        assert_eq!(enabled.cursor, "pointer");
        assert_eq!(disabled.cursor, "not-allowed");
        assert_eq!(enabled.padding_y, disabled.padding_y);
    }

    #[test]
    fn ghost_draws_a_solid_token_border() {
        let theme = Theme::default();
        let ghost = ButtonStyle::resolve(&theme, ButtonVariant::Ghost, ButtonSize::Small, false);
        let primary = ButtonStyle::resolve(&theme, ButtonVariant::Primary, ButtonSize::Small, false);

        assert_eq!(ghost.border_style, "solid");
        assert_eq!(ghost.border_width, "var(--button-border-width-ghost)");
        assert_eq!(ghost.border_color, "var(--button-ghost-border-default)");
        assert_eq!(primary.border_style, "none");
        assert_eq!(primary.border_width, "var(--button-border-width-default)");
    }

    #[test]
    fn size_tokens_follow_the_size_class() {
        let theme = Theme::default();
        let large = ButtonStyle::resolve(&theme, ButtonVariant::Primary, ButtonSize::Large, false);

        assert_eq!(large.padding_y, "var(--button-size-large-padding-y)");
        assert_eq!(large.padding_x, "var(--button-size-large-padding-x)");
        assert_eq!(large.font_size, "var(--button-size-large-font-size)");
        assert_eq!(large.min_height, "var(--button-size-large-min-height)");
    }

    #[test]
    fn theme_overrides_flow_into_the_resolved_style() {
        let theme = Theme::default()
            .with_override("button-secondary-background-default", "#eeeeee")
            .expect("valid override");
        let style = ButtonStyle::resolve(&theme, ButtonVariant::Secondary, ButtonSize::Medium, false);

        assert_eq!(style.background, "#eeeeee");
        assert_eq!(style.border_color, "#eeeeee");
    }

    #[test]
    fn caller_style_is_appended_last() {
        let style = ButtonStyle::resolve(
            &Theme::default(),
            ButtonVariant::Primary,
            ButtonSize::Medium,
            false,
        );

        let inline = style.to_inline_with(Some("width: 100%;"));
        assert!(inline.starts_with("padding: var(--button-size-medium-padding-y)"));
        assert!(inline.ends_with("cursor: pointer; width: 100%;"));
        assert_eq!(style.to_inline_with(Some(" ")), style.to_inline());
    }

    #[test]
    fn resolution_is_deterministic() {
        let theme = Theme::default();
        let first = ButtonStyle::resolve(&theme, ButtonVariant::Ghost, ButtonSize::Large, true);
        let second = ButtonStyle::resolve(&theme, ButtonVariant::Ghost, ButtonSize::Large, true);

        assert_eq!(first, second);
        assert_eq!(first.to_inline(), second.to_inline());
    }
}
