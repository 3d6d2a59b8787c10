//! The generic validator chain.
//!
//! A [`Validator`] wraps a working value for the duration of one edit. Checks
//! consume the chain and hand it back on success, so a sequence of checks reads
//! as a `?` chain:
//!
//! ```
//! use editstate_validate::Validator;
//!
//! let name = Validator::new("  Ada  ").required(None)?;
//! assert_eq!(name.get(), "  Ada  ");
//! # Ok::<(), editstate_validate::ValidationError>(())
//! ```

use serde_json::Value;

use crate::error::{Result, ValidationError};

pub(crate) const REQUIRED_MESSAGE: &str = "Can't be empty";

/// Whitespace trimming applied to string input before any check runs.
///
/// Transforms run in the order `trim`, `trim_left`, `trim_right`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimOptions {
    pub trim: bool,
    pub trim_left: bool,
    pub trim_right: bool,
}

impl TrimOptions {
    /// No trimming at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Trim both ends.
    pub fn both() -> Self {
        Self::default().with_trim(true)
    }

    #[must_use]
    pub fn with_trim(mut self, enable: bool) -> Self {
        self.trim = enable;
        self
    }

    #[must_use]
    pub fn with_trim_left(mut self, enable: bool) -> Self {
        self.trim_left = enable;
        self
    }

    #[must_use]
    pub fn with_trim_right(mut self, enable: bool) -> Self {
        self.trim_right = enable;
        self
    }

    pub fn apply(&self, input: &str) -> String {
        let mut out = input;
        if self.trim {
            out = out.trim();
        }
        if self.trim_left {
            out = out.trim_start();
        }
        if self.trim_right {
            out = out.trim_end();
        }
        out.to_string()
    }
}

/// Truthiness of a working value, as used by [`Validator::required`].
///
/// Empty strings, `null`, zero, `NaN` and `false` are falsy. Arrays and
/// objects are always truthy, even when empty.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

/// Numeric reading of a value under coercive comparison rules.
///
/// Strings are trimmed; the empty string reads as zero. Returns `None` where a
/// coercive comparison would produce `NaN`.
pub(crate) fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Loose (coercive) equality.
///
/// Values of the same kind compare directly; numbers, numeric strings and
/// booleans compare by numeric reading; `null` only equals `null`. Arrays and
/// objects compare structurally against each other and never equal a scalar.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => a == b,
        _ => match (to_number(a), to_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Builds the failure for a check, preferring the caller's message.
pub(crate) fn failure(message: Option<&str>, default: impl FnOnce() -> String) -> ValidationError {
    match message {
        Some(message) => ValidationError::new(message),
        None => ValidationError::new(default()),
    }
}

/// A transient chain of checks over one working value.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator<T = Value> {
    value: T,
}

impl Validator<Value> {
    /// Wrap a raw input without trimming.
    pub fn new(input: impl Into<Value>) -> Self {
        Self::with_trim(input, TrimOptions::none())
    }

    /// Wrap a raw input, trimming it first when it is a string.
    pub fn with_trim(input: impl Into<Value>, trim: TrimOptions) -> Self {
        let value = match input.into() {
            Value::String(s) => Value::String(trim.apply(&s)),
            other => other,
        };
        Self { value }
    }
}

impl<T> Validator<T> {
    pub(crate) fn from_working(value: T) -> Self {
        Self { value }
    }

    /// The current working value.
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Run external checks in order, stopping at the first failure.
    pub fn chain<I, F>(self, checks: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&T) -> Result<()>,
    {
        for check in checks {
            check(&self.value)?;
        }
        Ok(self)
    }

    /// Run a single external check.
    pub fn check<F>(self, check: F) -> Result<Self>
    where
        F: FnOnce(&T) -> Result<()>,
    {
        check(&self.value)?;
        Ok(self)
    }
}

impl<T: Truthy> Validator<T> {
    /// Fail when the working value is falsy (see [`Truthy`]).
    pub fn required(self, message: Option<&str>) -> Result<Self> {
        if !self.value.is_truthy() {
            return Err(failure(message, || REQUIRED_MESSAGE.to_string()));
        }
        Ok(self)
    }
}

impl<T: Clone + Into<Value>> Validator<T> {
    /// Fail unless the working value loosely equals `expected`.
    pub fn is_equal(self, expected: impl Into<Value>, message: Option<&str>) -> Result<Self> {
        let expected = expected.into();
        if !loose_eq(&self.value.clone().into(), &expected) {
            return Err(failure(message, || format!("Must be equal to {expected}")));
        }
        Ok(self)
    }
}
