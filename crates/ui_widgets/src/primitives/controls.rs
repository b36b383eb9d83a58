use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Accessibility wiring between an input and its error message.
pub struct FieldErrorBinding {
    region_id: String,
    message: Option<String>,
}

impl FieldErrorBinding {
    /// Binds `message` to the field `field_id`; an empty message counts as none.
    pub fn new(field_id: &str, message: Option<String>) -> Self {
        Self {
            region_id: format!("{field_id}-error"),
            message: message.filter(|message| !message.is_empty()),
        }
    }

    /// Whether the field is currently invalid.
    pub fn is_invalid(&self) -> bool {
        self.message.is_some()
    }

    /// Value of `aria-invalid`.
    pub fn aria_invalid(&self) -> &'static str {
        bool_token(self.is_invalid())
    }

    /// Value of `aria-describedby`, present only while an error is shown.
    pub fn described_by(&self) -> Option<String> {
        self.message.as_ref().map(|_| self.region_id.clone())
    }

    /// Id of the alert region.
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    /// Message rendered in the alert region.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[component]
/// Labeled text-entry field with an optional error alert.
///
/// The value is fully controlled by the caller; the field performs no validation.
pub fn InputField(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let binding = {
        let id = id.clone();
        Signal::derive(move || FieldErrorBinding::new(&id, error.get()))
    };

    let label = label.map(|label| {
        view! {
            <label for=id.clone() data-ui-slot="label">
                {label}
                {required.then(|| view! { <span aria-label="required">"*"</span> })}
            </label>
        }
    });

    let alert = move || {
        let binding = binding.get();
        binding.message().map(|message| {
            view! {
                <div id=binding.region_id().to_string() role="alert" data-ui-slot="error">
                    {message.to_string()}
                </div>
            }
        })
    };

    view! {
        <div
            class=merge_class("ui-input-field", class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="input-field"
            data-ui-invalid=move || binding.get().aria_invalid()
        >
            {label}
            <input
                class="ui-field"
                id=id
                name=name
                type=input_type.token()
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                required=required
                aria-invalid=move || binding.get().aria_invalid()
                aria-describedby=move || binding.get().described_by()
                data-ui-slot="control"
                on:input=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(ev);
                    }
                }
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus.as_ref() {
                        on_focus.call(ev);
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
            />
            {alert}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_message_marks_field_invalid_and_links_alert_region() {
        let binding = FieldErrorBinding::new("email", Some("Enter a valid email".to_string()));

        assert!(binding.is_invalid());
        assert_eq!(binding.aria_invalid(), "true");
        assert_eq!(binding.described_by().as_deref(), Some("email-error"));
        assert_eq!(binding.region_id(), "email-error");
        assert_eq!(binding.message(), Some("Enter a valid email"));
    }

    #[test]
    fn absent_or_empty_error_leaves_field_valid_without_region() {
        for message in [None, Some(String::new())] {
            let binding = FieldErrorBinding::new("email", message.clone());

            assert!(!binding.is_invalid(), "{message:?}");
            assert_eq!(binding.aria_invalid(), "false");
            assert_eq!(binding.described_by(), None);
            assert_eq!(binding.message(), None);
        }
    }

    #[test]
    fn whitespace_error_is_still_shown_verbatim() {
        let binding = FieldErrorBinding::new("f", Some("   ".to_string()));

        assert!(binding.is_invalid());
        assert_eq!(binding.aria_invalid(), "true");
        assert_eq!(binding.described_by().as_deref(), Some("f-error"));
        assert_eq!(binding.message(), Some("   "));
    }

    #[test]
    fn binding_is_deterministic_for_identical_input() {
        let first = FieldErrorBinding::new("zip", Some("Required".to_string()));
        let second = FieldErrorBinding::new("zip", Some("Required".to_string()));
        assert_eq!(first, second);
    }
}
