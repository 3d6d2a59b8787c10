//! Tests for the property state machine.

use editstate_model::{Editable, FieldError, Property, Serializable, UNSET_MESSAGE};
use editstate_validate::{ValidationError, to_int, to_string};
use serde_json::{Value, json};

fn zero_validator(input: &Value) -> Result<Value, ValidationError> {
    to_int(input.clone())?.is_equal(0, Some("Nothing except 0 allowed"))?;
    Ok(input.clone())
}

fn assert_valid_with(prop: &Property, expected: &Value) {
    assert_eq!(prop.get(), Some(expected));
    assert_eq!(prop.input(), Some(expected));
    assert_eq!(prop.serialize(), *expected);
    assert_eq!(prop.error(), None);
    assert!(prop.has_valid_value());
}

#[test]
fn initial_values_start_valid() {
    for initial in [json!(-1), json!("dummy"), json!([1, 2, 3]), json!({"a": 1}), json!(false)] {
        let mut prop = Property::new(initial.clone()).named("initial");
        assert_valid_with(&prop, &initial);
        prop.reset();
        assert_valid_with(&prop, &initial);
    }
}

#[test]
fn no_initial_value_is_unset() {
    let mut prop = Property::unset();
    assert_eq!(prop.get(), None);
    assert_eq!(prop.input(), None);
    assert_eq!(prop.serialize(), Value::Null);
    assert_eq!(prop.error(), Some(FieldError::Unset));
    assert!(prop.error().is_some_and(|e| e.is_unset()));
    assert!(!prop.has_valid_value());

    prop.reset();
    assert_eq!(prop.error(), Some(FieldError::Unset));
    assert!(!prop.has_valid_value());
}

#[test]
fn unset_sentinel_is_not_a_message() {
    let prop = Property::unset();
    let error = prop.error().unwrap();
    assert_eq!(error.message(), None);
    assert_eq!(error.to_string(), UNSET_MESSAGE);

    let mut rejected = Property::unset();
    rejected.set_with(UNSET_MESSAGE, |_| {
        Err::<Value, _>(ValidationError::new(UNSET_MESSAGE))
    });
    assert_ne!(rejected.error(), Some(FieldError::Unset));
}

#[test]
fn rejected_set_keeps_last_valid_value() {
    let mut prop = Property::new(42);
    assert!(!prop.set_with(24, zero_validator));
    assert_eq!(prop.get(), Some(&json!(42)));
    assert_eq!(prop.input(), Some(&json!(24)));
    assert_eq!(
        prop.error(),
        Some(FieldError::Invalid("Nothing except 0 allowed".to_string()))
    );
    assert!(prop.has_valid_value());
    assert_eq!(prop.serialize(), json!(42));

    prop.reset();
    assert_valid_with(&prop, &json!(42));
}

#[test]
fn accepted_set_replaces_value() {
    let mut prop = Property::new(42);
    assert!(prop.set_with(0, zero_validator));
    assert_valid_with(&prop, &json!(0));
}

#[test]
fn unset_property_rejected_then_fixed() {
    let mut prop = Property::unset();
    assert!(!prop.set_with(5, zero_validator));
    assert_eq!(prop.get(), None);
    assert_eq!(prop.input(), Some(&json!(5)));
    assert_eq!(
        prop.error(),
        Some(FieldError::Invalid("Nothing except 0 allowed".to_string()))
    );

    prop.reset();
    assert_eq!(prop.input(), None);
    assert_eq!(prop.error(), Some(FieldError::Unset));

    assert!(prop.set_with("0", zero_validator));
    assert_eq!(prop.get(), Some(&json!("0")));
    assert_eq!(prop.error(), None);
}

#[test]
fn set_without_validator_always_accepts() {
    let mut prop = Property::new(1);
    assert!(!prop.set_with("x", zero_validator));
    assert!(prop.set("anything"));
    assert_valid_with(&prop, &json!("anything"));
}

#[test]
fn validator_returning_nothing_is_rejected() {
    let mut prop = Property::new(1);
    assert!(!prop.set_with(2, |_| Ok::<_, ValidationError>(None::<Value>)));
    assert_eq!(prop.get(), Some(&json!(1)));
    assert_eq!(prop.input(), Some(&json!(2)));
    assert_eq!(prop.error(), None);
}

#[test]
fn reset_is_idempotent() {
    let mut prop = Property::new("ok");
    prop.set_with("way too long for the limit", |v| {
        to_string(v.clone()).max_length(5, true, None)
    });
    prop.reset();
    let once = format!("{prop:?}");
    prop.reset();
    assert_eq!(format!("{prop:?}"), once);
    assert_valid_with(&prop, &json!("ok"));
}

#[test]
fn chain_result_becomes_value() {
    let mut prop = Property::new(1);
    assert!(prop.set_with("10", |v| to_int(v.clone())?.greater_than(5, None)));
    assert_eq!(prop.get(), Some(&json!(10)));
    assert_eq!(prop.input(), Some(&json!("10")));
}
