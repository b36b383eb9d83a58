//! Widget primitives plus the closed token enums they are configured with.

use std::str::FromStr;

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use thiserror::Error;

use crate::theme::use_theme;

mod activation;
mod button;
mod controls;
mod data_display;
mod style;

pub use activation::{ActivationEvent, ActivationKey, ActivationPolicy, HoverPhase, KeyDecision};
pub use button::{Button, ButtonState, LeadingSlot};
pub use controls::{FieldErrorBinding, InputField};
pub use data_display::{Card, TestBlock};
pub use style::ButtonStyle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} `{value}`")]
/// A configuration string did not name a known enum member.
pub struct ParseTokenError {
    kind: &'static str,
    value: String,
}

impl ParseTokenError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual button variants.
pub enum ButtonVariant {
    /// Emphasized primary action.
    Primary,
    /// Secondary action.
    Secondary,
    /// Destructive action.
    Danger,
    /// Outlined, transparent action.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Danger, Self::Ghost];

    /// Stable token used in DOM hooks and design-token names.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Ghost => "ghost",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == raw)
            .ok_or_else(|| ParseTokenError::new("button variant", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing classes.
pub enum ButtonSize {
    /// Dense button.
    Small,
    /// Default button.
    Medium,
    /// Large button.
    Large,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl ButtonSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Stable token used in DOM hooks and design-token names.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw)
            .ok_or_else(|| ParseTokenError::new("button size", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` of the rendered `<button>`.
pub enum ButtonKind {
    /// Plain button with no form behavior.
    Button,
    /// Submits the enclosing form.
    Submit,
    /// Resets the enclosing form.
    Reset,
}

impl Default for ButtonKind {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonKind {
    /// Every kind.
    pub const ALL: [Self; 3] = [Self::Button, Self::Submit, Self::Reset];

    /// Value of the native `type` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    /// Whether activation must go through the native click path to keep form semantics.
    pub fn is_form_action(self) -> bool {
        matches!(self, Self::Submit | Self::Reset)
    }
}

impl FromStr for ButtonKind {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == raw)
            .ok_or_else(|| ParseTokenError::new("button kind", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` of the rendered `<input>`.
pub enum InputType {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric input.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    /// Every input type.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
    ];

    /// Value of the native `type` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }
}

impl FromStr for InputType {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|input_type| input_type.token() == raw)
            .ok_or_else(|| ParseTokenError::new("input type", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual state of a [`TestBlock`].
pub enum BlockState {
    /// Active, accent-colored block.
    Default,
    /// Greyed-out block.
    Inactive,
}

impl Default for BlockState {
    fn default() -> Self {
        Self::Default
    }
}

impl BlockState {
    /// Value of the `data-state` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for BlockState {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "default" => Ok(Self::Default),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ParseTokenError::new("block state", raw)),
        }
    }
}

/// Joins a base class with an optional caller class, dropping blank overrides.
pub(crate) fn merge_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_documented_configuration() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
        assert_eq!(ButtonKind::default(), ButtonKind::Button);
        assert_eq!(InputType::default(), InputType::Text);
        assert_eq!(BlockState::default(), BlockState::Default);
    }

    #[test]
    fn tokens_parse_back_to_their_enum() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(variant));
        }
        for input_type in InputType::ALL {
            assert_eq!(input_type.token().parse::<InputType>(), Ok(input_type));
        }
        assert_eq!("inactive".parse::<BlockState>(), Ok(BlockState::Inactive));
    }

    #[test]
    fn unknown_tokens_fail_fast_with_the_rejected_value() {
        let err = "outline".parse::<ButtonVariant>().expect_err("unknown variant");
        assert_eq!(err.value(), "outline");
        assert_eq!(err.to_string(), "unrecognized button variant `outline`");

        assert!("Primary".parse::<ButtonVariant>().is_err());
        assert!("xl".parse::<ButtonSize>().is_err());
        assert!("link".parse::<ButtonKind>().is_err());
        assert!("date".parse::<InputType>().is_err());
        assert!("hidden".parse::<BlockState>().is_err());
    }

    #[test]
    fn only_submit_and_reset_are_form_actions() {
        assert!(!ButtonKind::Button.is_form_action());
        assert!(ButtonKind::Submit.is_form_action());
        assert!(ButtonKind::Reset.is_form_action());
    }

    #[test]
    fn merge_class_skips_blank_overrides() {
        assert_eq!(merge_class("ui-card", None), "ui-card");
        assert_eq!(merge_class("ui-card", Some("  ")), "ui-card");
        assert_eq!(merge_class("ui-card", Some("promo")), "ui-card promo");
    }
}
