//! Design-token lookup for widget rendering.
//!
//! Widgets never emit literal colors or dimensions. Every visual value is a named token that the
//! active [`Theme`] resolves either to a caller-supplied override or to the `var(--<token>)`
//! indirection consumed by the host stylesheet. Themes travel through the Leptos context tree
//! ([`provide_theme`] / [`use_theme`]) rather than global state.

use std::collections::BTreeMap;
use std::rc::Rc;

use leptos::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while building a [`Theme`] from configuration.
pub enum ThemeError {
    /// Theme configuration was not valid JSON or did not match the expected shape.
    #[error("theme config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// Override key is not a bare token name.
    #[error("invalid design token name `{0}`")]
    InvalidTokenName(String),
    /// Override value is empty or could break out of a declaration block.
    #[error("invalid value for design token `{name}`: `{value}`")]
    InvalidTokenValue {
        /// Token being overridden.
        name: String,
        /// Rejected value.
        value: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeConfig {
    #[serde(default)]
    overrides: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Injected design-token resolver.
///
/// The default theme carries no overrides and resolves every token to `var(--<token>)`.
pub struct Theme {
    overrides: Rc<BTreeMap<String, String>>,
}

impl Theme {
    /// Builds a theme from a JSON document of the form `{ "overrides": { "<token>": "<value>" } }`.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(raw)?;
        config
            .overrides
            .into_iter()
            .try_fold(Self::default(), |theme, (name, value)| {
                theme.with_override(name, value)
            })
    }

    /// Returns a copy of the theme with `name` pinned to `value`.
    pub fn with_override(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ThemeError> {
        let name = name.into();
        let value = value.into();
        if !is_token_name(&name) {
            return Err(ThemeError::InvalidTokenName(name));
        }
        if !is_token_value(&value) {
            return Err(ThemeError::InvalidTokenValue { name, value });
        }
        Rc::make_mut(&mut self.overrides).insert(name, value);
        Ok(self)
    }

    /// Resolves a token to the CSS value widgets should emit.
    pub fn resolve(&self, name: &str) -> String {
        match self.overrides.get(name) {
            Some(value) => value.clone(),
            None => css_var(name),
        }
    }

    /// Number of pinned token values.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// `:root` block redefining every overridden token, so stylesheet rules written against
    /// `var(--<token>)` pick up the theme. Empty when nothing is overridden.
    pub fn root_declarations(&self) -> String {
        if self.overrides.is_empty() {
            return String::new();
        }
        let declarations = self
            .overrides
            .iter()
            .map(|(name, value)| format!("  --{name}: {value};\n"))
            .collect::<String>();
        format!(":root {{\n{declarations}}}\n")
    }
}

fn css_var(name: &str) -> String {
    format!("var(--{name})")
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

fn is_token_value(value: &str) -> bool {
    !value.trim().is_empty() && !value.contains([';', '{', '}', '<'])
}

/// Installs `theme` for every widget rendered below the current reactive owner.
pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

/// Returns the nearest provided theme, falling back to the pure `var(--…)` theme.
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[component]
/// Scopes a [`Theme`] to its children.
pub fn ThemeProvider(theme: Theme, children: Children) -> impl IntoView {
    provide_theme(theme);
    children()
}
