//! String-specific checks.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

use crate::error::Result;
use crate::validator::{TrimOptions, Validator, failure};

/// Optional integer or decimal shape. Accepts `""`, `123.` and `.4`.
static NUMERICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("Invalid numerical regex"));

pub type StringValidator = Validator<String>;

/// Start a string chain from a raw input, without trimming.
pub fn to_string(input: impl Into<Value>) -> StringValidator {
    to_string_with(input, TrimOptions::none())
}

/// Start a string chain from a raw input.
///
/// `null` becomes the empty string and integral floats drop their fraction
/// (`1.0` reads as `"1"`). Booleans and structured values use their JSON text.
pub fn to_string_with(input: impl Into<Value>, trim: TrimOptions) -> StringValidator {
    let text = match input.into() {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => number_text(&n),
        other => other.to_string(),
    };
    Validator::from_working(trim.apply(&text))
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

impl Validator<String> {
    /// Length in characters, not bytes.
    fn char_len(&self) -> usize {
        self.get().chars().count()
    }

    pub fn min_length(
        self,
        limit: usize,
        allow_equal: bool,
        message: Option<&str>,
    ) -> Result<Self> {
        let len = self.char_len();
        let ok = if allow_equal { len >= limit } else { len > limit };
        if !ok {
            return Err(failure(message, || {
                format!("Value must be longer than {limit} characters")
            }));
        }
        Ok(self)
    }

    pub fn max_length(
        self,
        limit: usize,
        allow_equal: bool,
        message: Option<&str>,
    ) -> Result<Self> {
        let len = self.char_len();
        let ok = if allow_equal { len <= limit } else { len < limit };
        if !ok {
            return Err(failure(message, || format!("Value exceeds {limit} characters")));
        }
        Ok(self)
    }

    /// Fail unless `pattern` matches somewhere in the value.
    pub fn matches(self, pattern: &Regex, message: Option<&str>) -> Result<Self> {
        if !pattern.is_match(self.get()) {
            return Err(failure(message, || {
                format!("Value must match /{}/", pattern.as_str())
            }));
        }
        Ok(self)
    }

    pub fn is_lower_case(self, message: Option<&str>) -> Result<Self> {
        if *self.get() != self.get().to_lowercase() {
            return Err(failure(message, || "Must be lowercase".to_string()));
        }
        Ok(self)
    }

    pub fn is_upper_case(self, message: Option<&str>) -> Result<Self> {
        if *self.get() != self.get().to_uppercase() {
            return Err(failure(message, || "Must be uppercase".to_string()));
        }
        Ok(self)
    }

    /// Fail unless the value looks like an optional integer or decimal.
    pub fn is_digit(self, message: Option<&str>) -> Result<Self> {
        if !NUMERICAL_REGEX.is_match(self.get()) {
            return Err(failure(message, || "Must be numerical".to_string()));
        }
        Ok(self)
    }
}
