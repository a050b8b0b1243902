//! Test Selector Tests

use test_selectors::{
    test_selector, test_selector_with_value, BindingOptions, ParseSelectorError, TestSelector,
};

#[test]
fn it_builds_a_selector_without_a_value() {
    assert_eq!(test_selector("post-title"), "[data-test-post-title]");
}

#[test]
fn it_builds_a_selector_with_a_value() {
    assert_eq!(
        test_selector_with_value("comment-id", "3"),
        "[data-test-comment-id=\"3\"]"
    );
}

#[test]
fn display_matches_the_builder_helpers() {
    assert_eq!(
        TestSelector::new("post-title").to_string(),
        test_selector("post-title")
    );
    assert_eq!(
        TestSelector::with_value("comment-id", "3").to_string(),
        test_selector_with_value("comment-id", "3")
    );
}

#[test]
fn it_escapes_quotes_and_backslashes_in_values() {
    assert_eq!(
        test_selector_with_value("title", r#"say "hi" \ now"#),
        r#"[data-test-title="say \"hi\" \\ now"]"#
    );
}

#[test]
fn it_parses_a_selector_without_a_value() {
    let selector: TestSelector = "[data-test-post-title]".parse().unwrap();
    assert_eq!(selector, TestSelector::new("post-title"));
}

#[test]
fn it_parses_a_selector_with_a_value() {
    let selector: TestSelector = "[data-test-comment-id=\"3\"]".parse().unwrap();
    assert_eq!(selector, TestSelector::with_value("comment-id", "3"));
}

#[test]
fn parsing_unescapes_quoted_values() {
    let rendered = test_selector_with_value("title", r#"say "hi" \ now"#);
    let selector: TestSelector = rendered.parse().unwrap();
    assert_eq!(selector.value.as_deref(), Some(r#"say "hi" \ now"#));
}

#[test]
fn it_round_trips_through_display_and_parse() {
    let original = TestSelector::with_value("comment-id", "3");
    let parsed: TestSelector = original.to_string().parse().unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn it_rejects_inputs_that_are_not_attribute_selectors() {
    for input in ["div", "[data-test-foo", "data-test-foo", "[data-test-foo='3']"] {
        let error = input.parse::<TestSelector>().unwrap_err();
        assert_eq!(error, ParseSelectorError {
            selector: input.to_owned(),
        });
    }
}

#[test]
fn it_rejects_selectors_outside_the_marker_namespace() {
    assert!("[foo]".parse::<TestSelector>().is_err());
    assert!("[aria-label=\"close\"]".parse::<TestSelector>().is_err());
}

#[test]
fn it_rejects_the_bare_marker() {
    assert!("[data-test]".parse::<TestSelector>().is_err());
    assert!("[data-test-]".parse::<TestSelector>().is_err());
}

#[test]
fn it_supports_a_custom_marker_prefix() {
    let options = BindingOptions::with_prefix("data-qa-");

    let rendered = TestSelector::with_value("comment-id", "3").to_selector_string(&options);
    assert_eq!(rendered, "[data-qa-comment-id=\"3\"]");

    let parsed = TestSelector::parse_with(&rendered, &options).unwrap();
    assert_eq!(parsed, TestSelector::with_value("comment-id", "3"));

    // The default prefix no longer matches.
    assert!(TestSelector::parse_with("[data-test-comment-id]", &options).is_err());
}
