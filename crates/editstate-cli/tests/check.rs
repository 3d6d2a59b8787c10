//! Tests for validator chains assembled from options.

use editstate_cli::check::{Bounds, CheckKind, CheckSpec, run_check};
use editstate_validate::TrimOptions;
use regex::Regex;
use serde_json::json;

fn error_of(input: &str, spec: &CheckSpec) -> Option<String> {
    run_check(input, spec).error
}

#[test]
fn plain_string_accepts_anything() {
    let report = run_check("", &CheckSpec::default());
    assert!(report.accepted);
    assert_eq!(report.kind, CheckKind::String);
    assert_eq!(report.value, Some(json!("")));
}

#[test]
fn required_rejects_empty_and_zero() {
    let string = CheckSpec::new(CheckKind::String).with_required(true);
    assert_eq!(error_of("", &string).as_deref(), Some("Can't be empty"));

    let int = CheckSpec::new(CheckKind::Int).with_required(true);
    assert_eq!(error_of("0", &int).as_deref(), Some("Can't be empty"));
    assert_eq!(error_of("7", &int), None);
}

#[test]
fn trimming_happens_before_checks() {
    let spec = CheckSpec::new(CheckKind::String)
        .with_trim(Some(TrimOptions::both()))
        .with_required(true);
    assert_eq!(error_of("   ", &spec).as_deref(), Some("Can't be empty"));

    let left = CheckSpec::new(CheckKind::String)
        .with_trim(Some(TrimOptions::none().with_trim_left(true)));
    assert_eq!(run_check("  a  ", &left).value, Some(json!("a  ")));
}

#[test]
fn first_failure_wins() {
    let spec = CheckSpec::new(CheckKind::String)
        .with_lengths(Some(2), Some(4), false)
        .with_case(true, false);
    assert_eq!(
        error_of("a", &spec).as_deref(),
        Some("Value must be longer than 2 characters")
    );
    assert_eq!(error_of("ABCDE", &spec).as_deref(), Some("Value exceeds 4 characters"));
    assert_eq!(error_of("ABC", &spec).as_deref(), Some("Must be lowercase"));
    assert_eq!(error_of("abc", &spec), None);
}

#[test]
fn inclusive_lengths() {
    let spec = CheckSpec::new(CheckKind::String).with_lengths(Some(3), Some(3), true);
    assert_eq!(error_of("abc", &spec), None);
    assert!(error_of("ab", &spec).is_some());
}

#[test]
fn pattern_and_digits() {
    let spec = CheckSpec::new(CheckKind::String)
        .with_pattern(Some(Regex::new("^[a-z]+$").unwrap()));
    assert_eq!(
        error_of("abc1", &spec).as_deref(),
        Some("Value must match /^[a-z]+$/")
    );

    let digits = CheckSpec::new(CheckKind::String).with_digit(true);
    assert_eq!(error_of("12.5", &digits), None);
    assert_eq!(error_of("1.2.3", &digits).as_deref(), Some("Must be numerical"));
}

#[test]
fn custom_message_replaces_every_default() {
    let spec = CheckSpec::new(CheckKind::String)
        .with_lengths(None, Some(3), false)
        .with_message(Some("Too long".to_string()));
    assert_eq!(error_of("abcd", &spec).as_deref(), Some("Too long"));

    let int = CheckSpec::new(CheckKind::Int).with_message(Some("Numbers only".to_string()));
    assert_eq!(error_of("x", &int).as_deref(), Some("Must be an integer"));
}

#[test]
fn integers_with_bounds() {
    let spec = CheckSpec::new(CheckKind::Int).with_bounds(Bounds {
        greater_than: Some(5.0),
        less_or_equal: Some(10.0),
        ..Bounds::default()
    });
    assert_eq!(run_check(" 8 ", &spec).value, Some(json!(8)));
    assert_eq!(error_of("abc", &spec).as_deref(), Some("Must be an integer"));
    assert_eq!(error_of("5", &spec).as_deref(), Some("Must be greater than 5"));
    assert_eq!(
        error_of("11", &spec).as_deref(),
        Some("Must be less than or equal to 10")
    );
}

#[test]
fn floats_with_bounds() {
    let spec = CheckSpec::new(CheckKind::Float).with_bounds(Bounds {
        greater_or_equal: Some(0.5),
        less_than: Some(2.0),
        ..Bounds::default()
    });
    assert_eq!(run_check("1.5", &spec).value, Some(json!(1.5)));
    assert_eq!(
        error_of("0.25", &spec).as_deref(),
        Some("Must be greater than or equal to 0.5")
    );
    assert_eq!(error_of("2", &spec).as_deref(), Some("Must be less than 2"));
    assert_eq!(error_of("two", &spec).as_deref(), Some("Must be a float"));
}

#[test]
fn urls() {
    let spec = CheckSpec::new(CheckKind::Url);
    assert_eq!(
        run_check(" https://example.com/a ", &spec).value,
        Some(json!("https://example.com/a"))
    );
    assert_eq!(error_of("not a url", &spec).as_deref(), Some("Must be a valid URL"));

    let untrimmed = spec.with_trim(Some(TrimOptions::none()));
    assert!(error_of(" https://example.com ", &untrimmed).is_some());
}

#[test]
fn textual_options_are_listed() {
    let spec = CheckSpec::new(CheckKind::Int)
        .with_lengths(Some(1), None, false)
        .with_digit(true);
    assert!(!spec.kind.is_textual());
    assert_eq!(spec.textual_options(), ["min-length", "digit"]);
    assert!(spec.bounds.is_empty());
}

#[test]
fn rejected_report_snapshot() {
    let spec = CheckSpec::new(CheckKind::Int).with_bounds(Bounds {
        greater_than: Some(5.0),
        ..Bounds::default()
    });
    insta::assert_json_snapshot!(run_check("3", &spec), @r#"
    {
      "input": "3",
      "kind": "int",
      "accepted": false,
      "error": "Must be greater than 5"
    }
    "#);
}
