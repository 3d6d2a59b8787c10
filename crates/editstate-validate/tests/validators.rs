//! Integration tests for validator chains.

use std::cell::Cell;

use editstate_validate::{
    TrimOptions, ValidationError, Validator, to_float, to_int, to_string, to_url,
};
use regex::Regex;
use serde_json::{Value, json};

fn message<T: std::fmt::Debug>(result: Result<T, ValidationError>) -> String {
    result.unwrap_err().into_message()
}

#[test]
fn checks_return_the_chain() {
    let v = Validator::new("test").required(None).unwrap();
    assert_eq!(v.get(), "test");

    let s = to_string("test")
        .min_length(2, false, None)
        .and_then(|s| s.max_length(10, false, None))
        .and_then(|s| s.matches(&Regex::new("test").unwrap(), None))
        .and_then(|s| s.is_lower_case(None))
        .unwrap();
    assert_eq!(s.into_inner(), "test");

    assert!(to_string("TEST").is_upper_case(None).is_ok());
    assert!(to_string("123.4").is_digit(None).is_ok());
}

#[test]
fn trimming() {
    let raw = " test ";
    assert_eq!(Validator::new(raw).get(), " test ");
    assert_eq!(Validator::with_trim(raw, TrimOptions::both()).get(), "test");
    assert_eq!(
        Validator::with_trim(raw, TrimOptions::none().with_trim_left(true)).get(),
        "test "
    );
    assert_eq!(
        Validator::with_trim(raw, TrimOptions::none().with_trim_right(true)).get(),
        " test"
    );
    assert_eq!(
        Validator::with_trim(
            raw,
            TrimOptions::none().with_trim_left(true).with_trim_right(true)
        )
        .get(),
        "test"
    );
}

#[test]
fn required_is_a_truthiness_test() {
    assert_eq!(message(Validator::new("").required(None)), "Can't be empty");
    assert_eq!(message(Validator::new(json!(null)).required(None)), "Can't be empty");
    assert_eq!(
        message(Validator::new(Value::from(None::<i64>)).required(None)),
        "Can't be empty"
    );
    assert_eq!(message(Validator::new(0).required(None)), "Can't be empty");
    assert_eq!(message(Validator::new(false).required(None)), "Can't be empty");
    assert_eq!(
        message(Validator::with_trim("   ", TrimOptions::both()).required(None)),
        "Can't be empty"
    );
    assert!(Validator::new("test").required(None).is_ok());
    assert!(Validator::new(json!([])).required(None).is_ok());
}

#[test]
fn is_equal_uses_loose_comparison() {
    assert!(Validator::new("0").is_equal(0, None).is_ok());
    assert!(to_int("0").unwrap().is_equal("0", None).is_ok());
    assert_eq!(
        message(to_int("24").unwrap().is_equal(0, Some("Nothing except 0 allowed"))),
        "Nothing except 0 allowed"
    );
    assert_eq!(message(Validator::new("a").is_equal("b", None)), "Must be equal to \"b\"");
}

#[test]
fn string_lengths() {
    assert_eq!(
        message(to_string("1234").min_length(10, false, None)),
        "Value must be longer than 10 characters"
    );
    assert!(to_string("1234").min_length(2, false, None).is_ok());
    assert_eq!(
        message(to_string("1234567890").min_length(10, false, None)),
        "Value must be longer than 10 characters"
    );
    assert!(to_string("1234567890").min_length(10, true, None).is_ok());

    assert_eq!(
        message(to_string("1234567890").max_length(10, false, None)),
        "Value exceeds 10 characters"
    );
    assert!(to_string("1234").max_length(10, false, None).is_ok());
    assert!(to_string("1234567890").max_length(10, true, None).is_ok());
}

#[test]
fn regex_match() {
    assert_eq!(
        message(to_string("1234567890").matches(&Regex::new("01234").unwrap(), None)),
        "Value must match /01234/"
    );
    assert!(
        to_string("1234567890")
            .matches(&Regex::new("1234567890").unwrap(), None)
            .is_ok()
    );
}

#[test]
fn case_and_numerical_shape() {
    assert_eq!(message(to_string("test").is_upper_case(None)), "Must be uppercase");
    assert!(to_string("TEST").is_upper_case(None).is_ok());
    assert_eq!(message(to_string("TEST").is_lower_case(None)), "Must be lowercase");
    assert!(to_string("test").is_lower_case(None).is_ok());

    assert_eq!(message(to_string("test").is_digit(None)), "Must be numerical");
    assert_eq!(message(to_string("1.2.3").is_digit(None)), "Must be numerical");
    for ok in ["123", "123.", "123.4", ".4", ""] {
        assert!(to_string(ok).is_digit(None).is_ok(), "{ok}");
    }
}

#[test]
fn int_conversion() {
    assert_eq!(message(to_int("abc")), "Must be an integer");
    assert_eq!(*to_int("10").unwrap().greater_than(5, None).unwrap().get(), 10);
    assert_eq!(*to_int(" -3 ").unwrap().get(), -3);
    assert_eq!(message(to_int("3.5")), "Must be an integer");
}

#[test]
fn float_conversion_and_bounds() {
    assert_eq!(message(to_float("abc")), "Must be a float");
    let v = to_float("2.5").unwrap();
    assert_eq!(message(v.clone().greater_than(2.5, None)), "Must be greater than 2.5");
    assert!(v.clone().greater_or_equal(2.5, None).is_ok());
    assert_eq!(message(v.clone().less_than(2.5, None)), "Must be less than 2.5");
    assert!(v.clone().less_or_equal(2.5, None).is_ok());
    assert_eq!(
        message(v.clone().less_or_equal(1.0, None)),
        "Must be less than or equal to 1"
    );
    assert_eq!(
        message(v.greater_or_equal(3.0, None)),
        "Must be greater than or equal to 3"
    );
}

#[test]
fn url_conversion() {
    let url = to_url("  https://example.com/path  ").unwrap();
    assert_eq!(url.get(), "https://example.com/path");
    assert_eq!(message(to_url("not a url")), "Must be a valid URL");
}

type Check<'a> = Box<dyn FnOnce(&i64) -> Result<(), ValidationError> + 'a>;

#[test]
fn chain_stops_at_first_failure() {
    let ran_after_failure = Cell::new(false);
    let pass: Check = Box::new(|_: &i64| Ok(()));
    let too_big: Check = Box::new(|v: &i64| {
        if *v > 3 {
            Err(ValidationError::new("too big"))
        } else {
            Ok(())
        }
    });
    let spy: Check = Box::new(|_: &i64| {
        ran_after_failure.set(true);
        Ok(())
    });
    let err = to_int(10).unwrap().chain(vec![pass, too_big, spy]).unwrap_err();
    assert_eq!(err.message(), "too big");
    assert!(!ran_after_failure.get());
}

#[test]
fn chain_passes_through_on_success() {
    let even = |v: &i64| -> Result<(), ValidationError> {
        if v % 2 == 0 {
            Ok(())
        } else {
            Err(ValidationError::new("Must be even"))
        }
    };
    let v = to_int("8").unwrap().chain([even, even]).unwrap();
    assert_eq!(*v.get(), 8);
    assert_eq!(message(to_int("7").unwrap().check(even)), "Must be even");
}

mod trim_properties {
    use editstate_validate::{TrimOptions, Validator};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn trimmed_input_has_no_outer_whitespace(input in "[ \t]{0,3}[a-z ]{0,10}[ \t]{0,3}") {
            let v = Validator::with_trim(input.clone(), TrimOptions::both());
            let text = v.get().as_str().unwrap();
            prop_assert_eq!(text, input.trim());
        }

        #[test]
        fn untrimmed_input_is_preserved(input in ".{0,20}") {
            let v = Validator::new(input.clone());
            prop_assert_eq!(v.get().as_str().unwrap(), input.as_str());
        }
    }
}
