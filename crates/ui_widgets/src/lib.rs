//! Design-token driven UI widgets for Leptos front-ends.
//!
//! The crate provides a [`Button`] with a small interaction state machine and unified
//! pointer/keyboard activation, plus static display widgets ([`Card`], [`InputField`],
//! [`TestBlock`]). Visual values are never literals: they are token names resolved through the
//! [`Theme`] provided in context, and the stable `data-ui-*` DOM hooks pair with
//! [`WIDGET_STYLESHEET`] for rules that cannot be inlined.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod styles;
mod theme;

pub use primitives::{
    ActivationEvent, ActivationKey, ActivationPolicy, BlockState, Button, ButtonKind, ButtonSize,
    ButtonState, ButtonStyle, ButtonVariant, Card, FieldErrorBinding, HoverPhase, InputField,
    InputType, KeyDecision, LeadingSlot, ParseTokenError, TestBlock,
};
pub use styles::{themed_stylesheet, WidgetStyles, WIDGET_STYLESHEET};
pub use theme::{provide_theme, use_theme, Theme, ThemeError, ThemeProvider};

/// Convenience imports for crates composing these widgets.
pub mod prelude {
    pub use crate::{
        provide_theme, use_theme, ActivationEvent, BlockState, Button, ButtonKind, ButtonSize,
        ButtonVariant, Card, InputField, InputType, TestBlock, Theme, ThemeProvider,
        WidgetStyles,
    };
}
