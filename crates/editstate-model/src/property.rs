//! The leaf state holder.
//!
//! A [`Property`] keeps three things apart: the last accepted value, the last
//! attempted input, and the reason (if any) the two differ. Rejected input
//! never overwrites the accepted value.
//!
//! States:
//!
//! | state   | `get()`              | `error()`                |
//! |---------|----------------------|--------------------------|
//! | unset   | `None`               | `Some(FieldError::Unset)` |
//! | valid   | `Some(_)`            | `None`                   |
//! | invalid | last valid or `None` | `Some(FieldError::Invalid(_))` |

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use editstate_validate::{ValidationError, Validator};
use serde_json::Value;

use crate::editable::Editable;
use crate::error::{ErrorView, FieldError};
use crate::observer::{NoopObserver, Observer};
use crate::serializer::{Serializable, serialize};

/// Conversion of a validator's success value into the value to store.
///
/// `None` stands for a validator that reported success without producing a
/// value. That is treated as a bug in the validator, not as "clear the
/// field": the input is not applied.
pub trait Accepted {
    fn into_accepted(self) -> Option<Value>;
}

impl Accepted for Value {
    fn into_accepted(self) -> Option<Value> {
        Some(self)
    }
}

impl Accepted for String {
    fn into_accepted(self) -> Option<Value> {
        Some(Value::String(self))
    }
}

impl Accepted for &str {
    fn into_accepted(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl Accepted for i64 {
    fn into_accepted(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl Accepted for f64 {
    fn into_accepted(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl Accepted for bool {
    fn into_accepted(self) -> Option<Value> {
        Some(Value::Bool(self))
    }
}

impl<T: Into<Value>> Accepted for Option<T> {
    fn into_accepted(self) -> Option<Value> {
        self.map(Into::into)
    }
}

impl<T: Into<Value>> Accepted for Validator<T> {
    fn into_accepted(self) -> Option<Value> {
        Some(self.into_inner().into())
    }
}

pub struct Property {
    value: Option<Value>,
    input: Option<Value>,
    error: Option<FieldError>,
    name: Option<String>,
    observer: Rc<dyn Observer>,
}

impl Property {
    /// A valid property holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::from_option(Some(value.into()))
    }

    /// A property that has never been set.
    pub fn unset() -> Self {
        Self::from_option(None)
    }

    pub fn from_option(value: Option<Value>) -> Self {
        Self {
            error: initial_error(value.as_ref()),
            input: value.clone(),
            value,
            name: None,
            observer: Rc::new(NoopObserver),
        }
    }

    /// Label used in diagnostics.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Rc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name_if_missing(&mut self, name: &str) {
        if self.name.is_none() {
            self.name = Some(name.to_string());
        }
    }

    pub(crate) fn set_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observer = observer;
    }

    /// The last accepted value.
    pub fn get(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The last attempted input, accepted or not.
    pub fn input(&self) -> Option<&Value> {
        self.input.as_ref()
    }

    /// Why the input was not accepted: never set, or the last rejection.
    pub fn error(&self) -> Option<FieldError> {
        self.error.clone()
    }

    /// Accept `input` unconditionally.
    pub fn set(&mut self, input: impl Into<Value>) -> bool {
        let input = input.into();
        self.input = Some(input.clone());
        self.value = Some(input);
        self.error = None;
        true
    }

    /// Try to accept `input` through `validator`.
    ///
    /// On success the validator's result (not the raw input) becomes the new
    /// value. On failure the value is kept, the failure message becomes the
    /// error, and `false` is returned. The input is recorded either way.
    pub fn set_with<F, R>(&mut self, input: impl Into<Value>, validator: F) -> bool
    where
        F: FnOnce(&Value) -> Result<R, ValidationError>,
        R: Accepted,
    {
        let input = input.into();
        let outcome = validator(&input);
        self.input = Some(input);
        match outcome.map(Accepted::into_accepted) {
            Ok(Some(value)) => {
                self.value = Some(value);
                self.error = None;
                true
            }
            Ok(None) => {
                self.observer.validator_misuse(self.name());
                false
            }
            Err(failure) => {
                self.observer
                    .validation_failed(self.name(), failure.message());
                self.error = Some(FieldError::Invalid(failure.into_message()));
                false
            }
        }
    }
}

fn initial_error(value: Option<&Value>) -> Option<FieldError> {
    match value {
        Some(_) => None,
        None => Some(FieldError::Unset),
    }
}

impl Editable for Property {
    fn has_valid_value(&self) -> bool {
        self.value.is_some()
    }

    fn reset(&mut self) {
        self.input = self.value.clone();
        self.error = initial_error(self.value.as_ref());
    }

    fn error_view(&self) -> Option<ErrorView> {
        self.error.clone().map(ErrorView::from)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Serializable for Property {
    fn serialize(&self) -> Value {
        serialize(&self.value)
    }
}

impl Default for Property {
    fn default() -> Self {
        Self::unset()
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("input", &self.input)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
