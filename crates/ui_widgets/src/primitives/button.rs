use super::activation::{run_hover, run_key, run_pointer, DomActivation, DomHover};
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction state of a button, derived per render from its flags.
pub enum ButtonState {
    /// Accepts activation.
    Enabled,
    /// Explicitly disabled.
    Disabled,
    /// Busy; also blocks activation.
    Loading,
}

impl ButtonState {
    /// Derives the state; loading wins over the explicit disabled flag.
    pub fn from_flags(disabled: bool, loading: bool) -> Self {
        if loading {
            Self::Loading
        } else if disabled {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }

    /// `disabled || loading`.
    pub fn is_effectively_disabled(self) -> bool {
        !matches!(self, Self::Enabled)
    }

    /// Whether the busy indicator is shown.
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Value of `aria-busy`.
    pub fn aria_busy(self) -> &'static str {
        bool_token(self.is_loading())
    }

    /// Value of `aria-disabled`; mirrors the native `disabled` attribute.
    pub fn aria_disabled(self) -> &'static str {
        bool_token(self.is_effectively_disabled())
    }

    fn token(self) -> &'static str {
        match self {
            Self::Enabled => "idle",
            Self::Disabled => "disabled",
            Self::Loading => "loading",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Content rendered ahead of the button label.
pub enum LeadingSlot {
    /// Busy spinner.
    Spinner,
    /// Caller-provided icon.
    Icon,
    /// Nothing.
    Empty,
}

impl LeadingSlot {
    /// The spinner always suppresses the icon.
    pub fn for_state(loading: bool, has_icon: bool) -> Self {
        match (loading, has_icon) {
            (true, _) => Self::Spinner,
            (false, true) => Self::Icon,
            (false, false) => Self::Empty,
        }
    }

    /// Live-region role announced while busy.
    pub fn role(self) -> Option<&'static str> {
        matches!(self, Self::Spinner).then_some("status")
    }

    /// Accessible name of the slot element.
    pub fn aria_label(self) -> Option<&'static str> {
        matches!(self, Self::Spinner).then_some("Loading")
    }

    /// Decorative icons are hidden from assistive technology.
    pub fn aria_hidden(self) -> Option<&'static str> {
        matches!(self, Self::Icon).then_some("true")
    }
}

#[component]
/// Primary interactive control.
///
/// Clicking, `Enter`, and `Space` all invoke `on_click` exactly once while the button is enabled
/// and never while it is disabled or loading. Submit and reset buttons route keyboard activation
/// through the native click so form submission happens on the browser's own path. Hover
/// callbacks are forwarded regardless of state.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = ButtonKind::Button)] kind: ButtonKind,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] icon: Option<ViewFn>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<ActivationEvent>>,
    #[prop(optional)] on_mouse_enter: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mouse_leave: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let state = Signal::derive(move || ButtonState::from_flags(disabled.get(), loading.get()));
    let effective_disabled = Signal::derive(move || state.get().is_effectively_disabled());
    let inline_style = move || {
        ButtonStyle::resolve(&theme, variant, size, effective_disabled.get())
            .to_inline_with(style.as_deref())
    };
    let policy = move || ActivationPolicy::new(effective_disabled.get_untracked(), kind);
    let hover = move |ev: MouseEvent, phase: HoverPhase| {
        let host = DomHover::new(ev, on_mouse_enter, on_mouse_leave);
        run_hover(policy(), phase, &host);
    };

    let has_icon = icon.is_some();
    let leading = move || {
        let slot = LeadingSlot::for_state(state.get().is_loading(), has_icon);
        match slot {
            LeadingSlot::Spinner => view! {
                <span
                    class="ui-button-spinner"
                    role=slot.role()
                    aria-label=slot.aria_label()
                    data-ui-slot="spinner"
                ></span>
            }
            .into_view(),
            LeadingSlot::Icon => icon
                .as_ref()
                .map(|icon| {
                    view! {
                        <span aria-hidden=slot.aria_hidden() data-ui-slot="icon">
                            {icon.run()}
                        </span>
                    }
                })
                .into_view(),
            LeadingSlot::Empty => ().into_view(),
        }
    };

    view! {
        <button
            type=kind.token()
            id=id
            node_ref=node_ref
            class=merge_class("ui-button", class.as_deref())
            style=inline_style
            disabled=move || effective_disabled.get()
            aria-label=accessible_label_override(aria_label)
            aria-busy=move || state.get().aria_busy()
            aria-disabled=move || state.get().aria_disabled()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || state.get().token()
            on:click=move |ev: MouseEvent| {
                let host = DomActivation::new(ActivationEvent::Pointer(ev), on_click);
                run_pointer(policy(), &host);
            }
            on:keydown=move |ev: KeyboardEvent| {
                let key = ev.key();
                let host = DomActivation::new(ActivationEvent::Keyboard(ev), on_click);
                run_key(policy(), &key, &host);
            }
            on:mouseenter=move |ev| hover(ev, HoverPhase::Enter)
            on:mouseleave=move |ev| hover(ev, HoverPhase::Leave)
        >
            {leading}
            {children()}
        </button>
    }
}

/// `aria-label` is only emitted for a non-empty override; otherwise the content names the button.
fn accessible_label_override(aria_label: Option<String>) -> Option<String> {
    aria_label.filter(|label| !label.is_empty())
}
