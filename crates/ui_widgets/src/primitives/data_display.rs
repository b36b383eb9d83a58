use super::*;

fn test_block_class(state: BlockState, class: Option<&str>) -> String {
    let base = match state {
        BlockState::Default => "ui-test-block",
        BlockState::Inactive => "ui-test-block ui-test-block--inactive",
    };
    merge_class(base, class)
}

#[component]
/// Container surface grouping related content.
pub fn Card(
    #[prop(optional, into)] class: Option<String>,
    #[prop(into, default = "card".to_string())] test_id: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-card", class.as_deref())
            data-testid=test_id
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Fixed-size colored rectangle with a default and an inactive look.
pub fn TestBlock(
    #[prop(default = BlockState::Default)] state: BlockState,
    #[prop(optional, into)] class: Option<String>,
    #[prop(into, default = "testBlock".to_string())] test_id: String,
) -> impl IntoView {
    view! {
        <div
            class=test_block_class(state, class.as_deref())
            data-testid=test_id
            data-state=state.token()
            data-ui-primitive="true"
            data-ui-kind="test-block"
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inactive_block_is_visually_distinct() {
        let default = test_block_class(BlockState::Default, None);
        let inactive = test_block_class(BlockState::Inactive, None);

        assert_eq!(default, "ui-test-block");
        assert_eq!(inactive, "ui-test-block ui-test-block--inactive");
        assert_ne!(BlockState::Default.token(), BlockState::Inactive.token());
    }

    #[test]
    fn omitted_state_renders_default_look() {
        assert_eq!(
            test_block_class(BlockState::default(), None),
            test_block_class(BlockState::Default, None)
        );
        assert_eq!(BlockState::default().token(), "default");
    }

    #[test]
    fn caller_class_is_appended_after_state_classes() {
        assert_eq!(
            test_block_class(BlockState::Inactive, Some("wide")),
            "ui-test-block ui-test-block--inactive wide"
        );
        assert_eq!(
            test_block_class(BlockState::Default, Some("")),
            "ui-test-block"
        );
    }
}
