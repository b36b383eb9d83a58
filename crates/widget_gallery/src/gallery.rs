use leptos::*;
use ui_widgets::prelude::*;
use ui_widgets::{themed_stylesheet, ThemeError};

const GALLERY_THEME_JSON: &str = include_str!("../gallery_theme.json");

/// Theme applied to the gallery, falling back to pure token indirection if the bundled
/// overrides are unusable.
pub fn gallery_theme() -> Theme {
    match load_theme(GALLERY_THEME_JSON) {
        Ok(theme) => theme,
        Err(err) => {
            logging::warn!("gallery theme load failed, using default tokens: {err}");
            Theme::default()
        }
    }
}

fn load_theme(raw: &str) -> Result<Theme, ThemeError> {
    let theme = Theme::from_json(raw)?;
    logging::log!("gallery theme loaded with {} overrides", theme.override_count());
    Ok(theme)
}

fn variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "Primary",
        ButtonVariant::Secondary => "Secondary",
        ButtonVariant::Danger => "Danger",
        ButtonVariant::Ghost => "Ghost",
    }
}

fn email_error(value: &str) -> Option<String> {
    if value.is_empty() || value.contains('@') {
        None
    } else {
        Some("Enter an email address containing @".to_string())
    }
}

#[component]
/// Gallery root: theme scope, base stylesheet, and every widget section.
pub fn GalleryApp() -> impl IntoView {
    view! {
        <ThemeProvider theme=gallery_theme()>
            <WidgetStyles />
            <main class="gallery-root">
                <h1>"Widget gallery"</h1>
                <ButtonMatrix />
                <ButtonBehaviors />
                <FormDemo />
                <DisplayWidgets />
            </main>
        </ThemeProvider>
    }
}

#[component]
fn ButtonMatrix() -> impl IntoView {
    let rows = ButtonVariant::ALL
        .into_iter()
        .map(|variant| {
            let cells = ButtonSize::ALL
                .into_iter()
                .flat_map(|size| {
                    [false, true].into_iter().map(move |disabled| {
                        view! {
                            <Button variant size disabled>
                                {variant_label(variant)}
                            </Button>
                        }
                    })
                })
                .collect_view();
            view! { <div class="gallery-row" data-variant=variant.token()>{cells}</div> }
        })
        .collect_view();

    view! {
        <Card test_id="button-matrix">
            <h2>"Variants × sizes × disabled"</h2>
            {rows}
        </Card>
    }
}

#[component]
fn ButtonBehaviors() -> impl IntoView {
    let clicks = create_rw_signal(0u32);
    let last_source = create_rw_signal("none");
    let loading = create_rw_signal(false);
    let hovered = create_rw_signal(false);

    let record = Callback::new(move |ev: ActivationEvent| {
        clicks.update(|count| *count += 1);
        last_source.set(if ev.is_keyboard() { "keyboard" } else { "pointer" });
    });

    view! {
        <Card test_id="button-behaviors">
            <h2>"Activation"</h2>
            <p>
                {move || format!("Activations: {} (last: {})", clicks.get(), last_source.get())}
            </p>
            <Button on_click=record>"Click, Enter or Space"</Button>
            <Button
                variant=ButtonVariant::Secondary
                icon=|| view! { <span class="gallery-icon">"+"</span> }
                loading=loading
                on_click=record
                on_mouse_enter=Callback::new(move |_| hovered.set(true))
                on_mouse_leave=Callback::new(move |_| hovered.set(false))
            >
                "With icon"
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Small
                on_click=Callback::new(move |_| loading.update(|value| *value = !*value))
            >
                {move || if loading.get() { "Stop loading" } else { "Start loading" }}
            </Button>
            <Button variant=ButtonVariant::Danger aria_label="Delete item" on_click=record>
                "×"
            </Button>
            <p>{move || if hovered.get() { "Hovering icon button" } else { "Not hovering" }}</p>
        </Card>
    }
}

#[component]
fn FormDemo() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let submissions = create_rw_signal(0u32);
    let error = Signal::derive(move || email.with(|value| email_error(value)));
    let submit_ref = create_node_ref::<html::Button>();
    let focus_submit = Callback::new(move |_: ActivationEvent| {
        let Some(submit) = submit_ref.get() else {
            logging::warn!("submit button is not mounted");
            return;
        };
        if let Err(err) = submit.focus() {
            logging::warn!("failed to focus submit button: {err:?}");
        }
    });

    view! {
        <Card test_id="form-demo">
            <h2>"Form"</h2>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submissions.update(|count| *count += 1);
            }>
                <InputField
                    id="gallery-email"
                    name="email"
                    input_type=InputType::Email
                    label="Email"
                    placeholder="you@example.com"
                    required=true
                    value=email
                    error=error
                    on_change=Callback::new(move |ev| email.set(event_target_value(&ev)))
                />
                <Button kind=ButtonKind::Submit node_ref=submit_ref>"Submit"</Button>
                <Button kind=ButtonKind::Reset variant=ButtonVariant::Ghost>"Reset"</Button>
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Small on_click=focus_submit>
                    "Focus submit"
                </Button>
            </form>
            <p>{move || format!("Submissions: {}", submissions.get())}</p>
        </Card>
    }
}

#[component]
fn DisplayWidgets() -> impl IntoView {
    view! {
        <Card test_id="display-widgets" class="gallery-blocks">
            <h2>"Test blocks"</h2>
            <TestBlock />
            <TestBlock state=BlockState::Inactive test_id="testBlock-inactive" />
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_theme_parses() {
        let theme = load_theme(GALLERY_THEME_JSON).expect("bundled theme");
        assert_eq!(theme.override_count(), 3);
        assert_eq!(theme.resolve("test-block-size"), "263px");
        assert!(themed_stylesheet(&theme).contains("--test-block-size: 263px;"));
    }

    #[test]
    fn broken_theme_is_reported() {
        assert!(load_theme(r#"{ "overrides": { "--bad": "1px" } }"#).is_err());
    }

    #[test]
    fn email_error_only_for_non_empty_values_without_at_sign() {
        assert_eq!(email_error(""), None);
        assert_eq!(email_error("me@example.com"), None);
        assert!(email_error("me").is_some());
    }
}
