//! Integer and float chains.
//!
//! Both constructors coerce the raw input up front and fail before any other
//! check can run when the input does not read as a number.

use std::fmt::Display;

use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::validator::{Validator, failure};

pub type IntValidator = Validator<i64>;
pub type FloatValidator = Validator<f64>;

/// Working values that support ordered comparisons. Values reaching a chain
/// are never `NaN`.
pub trait Numeric: Copy + PartialOrd + Display + Into<Value> {}

impl Numeric for i64 {}
impl Numeric for f64 {}

/// Start an integer chain. Accepts integral numbers and strings holding an
/// integer (surrounding whitespace allowed).
pub fn to_int(input: impl Into<Value>) -> Result<IntValidator> {
    parse_int(&input.into())
        .map(Validator::from_working)
        .ok_or_else(|| ValidationError::new("Must be an integer"))
}

/// Start a float chain. Accepts finite numbers and strings holding one.
pub fn to_float(input: impl Into<Value>) -> Result<FloatValidator> {
    parse_float(&input.into())
        .map(Validator::from_working)
        .ok_or_else(|| ValidationError::new("Must be a float"))
}

fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn parse_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

impl<T: Numeric> Validator<T> {
    pub fn greater_than(self, limit: T, message: Option<&str>) -> Result<Self> {
        if *self.get() <= limit {
            return Err(failure(message, || format!("Must be greater than {limit}")));
        }
        Ok(self)
    }

    pub fn greater_or_equal(self, limit: T, message: Option<&str>) -> Result<Self> {
        if *self.get() < limit {
            return Err(failure(message, || {
                format!("Must be greater than or equal to {limit}")
            }));
        }
        Ok(self)
    }

    pub fn less_than(self, limit: T, message: Option<&str>) -> Result<Self> {
        if *self.get() >= limit {
            return Err(failure(message, || format!("Must be less than {limit}")));
        }
        Ok(self)
    }

    pub fn less_or_equal(self, limit: T, message: Option<&str>) -> Result<Self> {
        if *self.get() > limit {
            return Err(failure(message, || {
                format!("Must be less than or equal to {limit}")
            }));
        }
        Ok(self)
    }
}
