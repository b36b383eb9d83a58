//! Base stylesheet for rules that cannot live in inline styles (pseudo-classes, keyframes).

use leptos::*;

use crate::theme::{use_theme, Theme};

/// Token-driven base rules for every widget in this crate.
pub const WIDGET_STYLESHEET: &str = include_str!("../styles/widgets.css");

/// Base rules preceded by the theme's `:root` token overrides.
pub fn themed_stylesheet(theme: &Theme) -> String {
    format!("{}{WIDGET_STYLESHEET}", theme.root_declarations())
}

#[component]
/// Injects the themed stylesheet as a `<style>` element. Render once near the app root, inside
/// the theme scope.
pub fn WidgetStyles() -> impl IntoView {
    let stylesheet = themed_stylesheet(&use_theme());
    view! { <style data-ui-stylesheet="widgets">{stylesheet}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_has_no_literal_colors() {
        assert!(!WIDGET_STYLESHEET.contains('#'));
        assert!(!WIDGET_STYLESHEET.contains("rgb("));
    }

    #[test]
    fn theme_overrides_reach_the_stylesheet_ahead_of_base_rules() {
        let theme = Theme::default()
            .with_override("test-block-size", "263px")
            .expect("valid override");
        let stylesheet = themed_stylesheet(&theme);

        assert!(stylesheet.starts_with(":root {\n  --test-block-size: 263px;\n}\n"));
        assert!(stylesheet.ends_with(WIDGET_STYLESHEET));
        assert!(stylesheet.contains("width: var(--test-block-size);"));
    }

    #[test]
    fn default_theme_leaves_base_rules_untouched() {
        assert_eq!(themed_stylesheet(&Theme::default()), WIDGET_STYLESHEET);
    }

    #[test]
    fn stylesheet_covers_every_widget_hook() {
        for selector in [
            ".ui-button",
            ".ui-button-spinner",
            "@keyframes ui-button-spin",
            ".ui-card",
            ".ui-input-field",
            ".ui-test-block",
            ".ui-test-block--inactive",
        ] {
            assert!(WIDGET_STYLESHEET.contains(selector), "missing {selector}");
        }
    }
}
