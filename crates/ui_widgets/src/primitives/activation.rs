//! Pointer and keyboard activation for the button primitive.
//!
//! Every gesture funnels into one activation routine so a click, `Enter`, or `Space` invokes the
//! caller's handler at most once. Decisions are pure; the DOM side effects they call for go
//! through [`ActivationHost`], which the button implements over `web_sys`.

use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement};

use super::*;

#[derive(Debug, Clone)]
/// Event handed to a button's `on_click` callback.
///
/// Keyboard activations arrive as [`ActivationEvent::Keyboard`] with the original target and
/// current target intact.
pub enum ActivationEvent {
    /// Pointer click, including clicks synthesized by the browser.
    Pointer(MouseEvent),
    /// `Enter` or `Space` keydown.
    Keyboard(KeyboardEvent),
}

impl ActivationEvent {
    /// Underlying DOM event.
    pub fn as_event(&self) -> &Event {
        match self {
            Self::Pointer(ev) => ev.as_ref(),
            Self::Keyboard(ev) => ev.as_ref(),
        }
    }

    /// Node the gesture originated on.
    pub fn target(&self) -> Option<EventTarget> {
        self.as_event().target()
    }

    /// Button element the listener is attached to.
    pub fn current_target(&self) -> Option<EventTarget> {
        self.as_event().current_target()
    }

    /// Whether the activation came from the keyboard.
    pub fn is_keyboard(&self) -> bool {
        matches!(self, Self::Keyboard(_))
    }

    pub(crate) fn current_element(&self) -> Option<HtmlElement> {
        self.current_target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys that activate a button.
pub enum ActivationKey {
    /// `Enter`.
    Enter,
    /// `Space` (`" "` in `KeyboardEvent.key`).
    Space,
}

impl ActivationKey {
    /// Maps a `KeyboardEvent.key` value; every other key is `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            " " => Some(Self::Space),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a keydown on the button should do.
pub enum KeyDecision {
    /// Not an activation key; the event is left alone.
    Ignore,
    /// Disabled button: prevent the browser default and stop.
    Suppress,
    /// Form action: prevent the default and re-dispatch through the element's native click.
    NativeClick,
    /// Prevent the default and invoke the handler with the keyboard event.
    Activate(ActivationKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Activation rules for one dispatch, captured from the already-resolved button state.
pub struct ActivationPolicy {
    effective_disabled: bool,
    kind: ButtonKind,
}

impl ActivationPolicy {
    /// Captures the dispatch-time state.
    pub fn new(effective_disabled: bool, kind: ButtonKind) -> Self {
        Self {
            effective_disabled,
            kind,
        }
    }

    /// Whether a pointer click reaches the handler.
    pub fn accepts_pointer(self) -> bool {
        !self.effective_disabled
    }

    /// Hover enter/leave is forwarded in every state, including disabled and loading.
    pub fn forwards_hover(self) -> bool {
        true
    }

    /// Classifies a keydown by its `KeyboardEvent.key`.
    pub fn key(self, key: &str) -> KeyDecision {
        let Some(key) = ActivationKey::from_key(key) else {
            return KeyDecision::Ignore;
        };
        if self.effective_disabled {
            KeyDecision::Suppress
        } else if self.kind.is_form_action() {
            KeyDecision::NativeClick
        } else {
            KeyDecision::Activate(key)
        }
    }
}

/// DOM operations an activation may perform.
pub(crate) trait ActivationHost {
    fn prevent_default(&self);
    fn is_focused(&self) -> bool;
    fn focus(&self);
    /// Dispatches the element's native click, which re-enters [`run_pointer`].
    fn native_click(&self);
    fn invoke(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer hover transitions forwarded to the caller.
pub enum HoverPhase {
    /// `mouseenter`.
    Enter,
    /// `mouseleave`.
    Leave,
}

/// Delivers hover transitions to the caller's callbacks.
pub(crate) trait HoverHost {
    fn notify(&self, phase: HoverPhase);
}

pub(crate) fn run_hover(policy: ActivationPolicy, phase: HoverPhase, host: &impl HoverHost) {
    if policy.forwards_hover() {
        host.notify(phase);
    }
}

pub(crate) fn run_pointer(policy: ActivationPolicy, host: &impl ActivationHost) {
    if !policy.accepts_pointer() {
        return;
    }
    if !host.is_focused() {
        host.focus();
    }
    host.invoke();
}

pub(crate) fn run_key(policy: ActivationPolicy, key: &str, host: &impl ActivationHost) {
    match policy.key(key) {
        KeyDecision::Ignore => {}
        KeyDecision::Suppress => host.prevent_default(),
        KeyDecision::NativeClick => {
            host.prevent_default();
            host.native_click();
        }
        KeyDecision::Activate(_) => {
            // Enter would otherwise also fire a native click, Space would scroll.
            host.prevent_default();
            host.invoke();
        }
    }
}

/// [`ActivationHost`] backed by the live DOM event.
pub(crate) struct DomActivation {
    event: ActivationEvent,
    on_click: Option<Callback<ActivationEvent>>,
}

impl DomActivation {
    pub(crate) fn new(event: ActivationEvent, on_click: Option<Callback<ActivationEvent>>) -> Self {
        Self { event, on_click }
    }
}

impl ActivationHost for DomActivation {
    fn prevent_default(&self) {
        self.event.as_event().prevent_default();
    }

    fn is_focused(&self) -> bool {
        let Some(element) = self.event.current_element() else {
            return false;
        };
        document()
            .active_element()
            .map(|active| active.is_same_node(Some(element.as_ref())))
            .unwrap_or(false)
    }

    fn focus(&self) {
        if let Some(element) = self.event.current_element() {
            if let Err(err) = element.focus() {
                logging::warn!("button focus failed: {err:?}");
            }
        }
    }

    fn native_click(&self) {
        if let Some(element) = self.event.current_element() {
            element.click();
        }
    }

    fn invoke(&self) {
        if let Some(on_click) = self.on_click.as_ref() {
            on_click.call(self.event.clone());
        }
    }
}

/// [`HoverHost`] backed by a live `mouseenter`/`mouseleave` event.
pub(crate) struct DomHover {
    event: MouseEvent,
    on_enter: Option<Callback<MouseEvent>>,
    on_leave: Option<Callback<MouseEvent>>,
}

impl DomHover {
    pub(crate) fn new(
        event: MouseEvent,
        on_enter: Option<Callback<MouseEvent>>,
        on_leave: Option<Callback<MouseEvent>>,
    ) -> Self {
        Self {
            event,
            on_enter,
            on_leave,
        }
    }
}

impl HoverHost for DomHover {
    fn notify(&self, phase: HoverPhase) {
        let callback = match phase {
            HoverPhase::Enter => self.on_enter.as_ref(),
            HoverPhase::Leave => self.on_leave.as_ref(),
        };
        if let Some(callback) = callback {
            callback.call(self.event.clone());
        }
    }
}
