//! One-shot validator chains assembled from options.

use editstate_validate::{
    Numeric, StringValidator, TrimOptions, ValidationError, Validator, to_float, to_int,
    to_string_with, to_url_with,
};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Which conversion starts the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    #[default]
    String,
    Int,
    Float,
    Url,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Url => "url",
        }
    }

    /// Trimming used when none is configured. URLs are trimmed on both ends.
    pub fn default_trim(self) -> TrimOptions {
        match self {
            Self::Url => TrimOptions::both(),
            Self::String | Self::Int | Self::Float => TrimOptions::none(),
        }
    }

    /// Whether length, pattern and case checks apply.
    pub fn is_textual(self) -> bool {
        matches!(self, Self::String | Self::Url)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds<T> {
    pub greater_than: Option<T>,
    pub greater_or_equal: Option<T>,
    pub less_than: Option<T>,
    pub less_or_equal: Option<T>,
}

impl<T> Bounds<T> {
    pub fn is_empty(&self) -> bool {
        self.greater_than.is_none()
            && self.greater_or_equal.is_none()
            && self.less_than.is_none()
            && self.less_or_equal.is_none()
    }
}

/// The checks to run, in the order they are applied.
#[derive(Debug, Clone, Default)]
pub struct CheckSpec {
    pub kind: CheckKind,
    /// Overrides [`CheckKind::default_trim`].
    pub trim: Option<TrimOptions>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Make length limits inclusive.
    pub allow_equal: bool,
    pub pattern: Option<Regex>,
    pub lower_case: bool,
    pub upper_case: bool,
    pub digit: bool,
    pub bounds: Bounds<f64>,
    /// Replaces the default message of every check.
    pub message: Option<String>,
}

impl CheckSpec {
    #[must_use]
    pub fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_trim(mut self, trim: Option<TrimOptions>) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn with_required(mut self, enable: bool) -> Self {
        self.required = enable;
        self
    }

    #[must_use]
    pub fn with_lengths(
        mut self,
        min: Option<usize>,
        max: Option<usize>,
        allow_equal: bool,
    ) -> Self {
        self.min_length = min;
        self.max_length = max;
        self.allow_equal = allow_equal;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: Option<Regex>) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_case(mut self, lower: bool, upper: bool) -> Self {
        self.lower_case = lower;
        self.upper_case = upper;
        self
    }

    #[must_use]
    pub fn with_digit(mut self, enable: bool) -> Self {
        self.digit = enable;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds<f64>) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Names of options that only make sense for textual kinds.
    pub fn textual_options(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.min_length.is_some() {
            names.push("min-length");
        }
        if self.max_length.is_some() {
            names.push("max-length");
        }
        if self.pattern.is_some() {
            names.push("pattern");
        }
        if self.lower_case {
            names.push("lower-case");
        }
        if self.upper_case {
            names.push("upper-case");
        }
        if self.digit {
            names.push("digit");
        }
        names
    }
}

/// Outcome of running a [`CheckSpec`] over one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub kind: CheckKind,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run every configured check over `input`, stopping at the first failure.
pub fn run_check(input: &str, spec: &CheckSpec) -> CheckReport {
    let trim = spec.trim.unwrap_or_else(|| spec.kind.default_trim());
    let outcome = match spec.kind {
        CheckKind::String => textual(to_string_with(input, trim), spec),
        CheckKind::Url => to_url_with(input, trim).and_then(|chain| textual(chain, spec)),
        CheckKind::Int => integer(&trim.apply(input), spec),
        CheckKind::Float => float(&trim.apply(input), spec),
    };
    tracing::debug!(input, kind = ?spec.kind, accepted = outcome.is_ok(), "check finished");
    let (value, error) = match outcome {
        Ok(value) => (Some(value), None),
        Err(failure) => (None, Some(failure.into_message())),
    };
    CheckReport {
        input: input.to_string(),
        kind: spec.kind,
        accepted: error.is_none(),
        value,
        error,
    }
}

fn textual(mut chain: StringValidator, spec: &CheckSpec) -> Result<Value, ValidationError> {
    let message = spec.message.as_deref();
    if spec.required {
        chain = chain.required(message)?;
    }
    if let Some(limit) = spec.min_length {
        chain = chain.min_length(limit, spec.allow_equal, message)?;
    }
    if let Some(limit) = spec.max_length {
        chain = chain.max_length(limit, spec.allow_equal, message)?;
    }
    if let Some(pattern) = &spec.pattern {
        chain = chain.matches(pattern, message)?;
    }
    if spec.lower_case {
        chain = chain.is_lower_case(message)?;
    }
    if spec.upper_case {
        chain = chain.is_upper_case(message)?;
    }
    if spec.digit {
        chain = chain.is_digit(message)?;
    }
    Ok(Value::String(chain.into_inner()))
}

fn integer(input: &str, spec: &CheckSpec) -> Result<Value, ValidationError> {
    let message = spec.message.as_deref();
    let mut chain = to_int(input)?;
    if spec.required {
        chain = chain.required(message)?;
    }
    // Bounds are given as floats, so integers are compared in f64.
    if !spec.bounds.is_empty() {
        bounded(to_float(*chain.get())?, spec.bounds, message)?;
    }
    Ok(Value::from(chain.into_inner()))
}

fn float(input: &str, spec: &CheckSpec) -> Result<Value, ValidationError> {
    let message = spec.message.as_deref();
    let mut chain = to_float(input)?;
    if spec.required {
        chain = chain.required(message)?;
    }
    let chain = bounded(chain, spec.bounds, message)?;
    Ok(Value::from(chain.into_inner()))
}

fn bounded<T: Numeric>(
    mut chain: Validator<T>,
    bounds: Bounds<T>,
    message: Option<&str>,
) -> Result<Validator<T>, ValidationError> {
    if let Some(limit) = bounds.greater_than {
        chain = chain.greater_than(limit, message)?;
    }
    if let Some(limit) = bounds.greater_or_equal {
        chain = chain.greater_or_equal(limit, message)?;
    }
    if let Some(limit) = bounds.less_than {
        chain = chain.less_than(limit, message)?;
    }
    if let Some(limit) = bounds.less_or_equal {
        chain = chain.less_or_equal(limit, message)?;
    }
    Ok(chain)
}
