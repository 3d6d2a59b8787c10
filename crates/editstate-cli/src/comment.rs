//! The comment box: one text property with a length limit, edited repeatedly.

use std::rc::Rc;

use editstate_model::{Editable, FieldError, NoopObserver, Observer, Property, Serializable};
use editstate_validate::{StringValidator, ValidationError, to_string};
use serde::Serialize;
use serde_json::Value;

pub const INITIAL_COMMENT: &str = "Initial value";
pub const COMMENT_LIMIT: usize = 20;

#[derive(Clone)]
pub struct CommentOptions {
    /// Exclusive maximum length in characters.
    pub limit: usize,
    /// Reset the property after the last edit, discarding rejected input.
    pub reset: bool,
    pub observer: Rc<dyn Observer>,
}

impl Default for CommentOptions {
    fn default() -> Self {
        Self {
            limit: COMMENT_LIMIT,
            reset: false,
            observer: Rc::new(NoopObserver),
        }
    }
}

impl CommentOptions {
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_reset(mut self, enable: bool) -> Self {
        self.reset = enable;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Rc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }
}

/// Property state after one edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditStep {
    pub input: String,
    pub accepted: bool,
    pub value: Option<Value>,
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentSession {
    pub limit: usize,
    pub steps: Vec<EditStep>,
    pub reset: bool,
    /// Final property state.
    pub valid: bool,
    pub input: Option<Value>,
    pub error: Option<FieldError>,
    /// What would be submitted.
    pub payload: Value,
}

/// The validator used for every comment edit.
pub fn comment_validator(
    limit: usize,
) -> impl Fn(&Value) -> Result<StringValidator, ValidationError> {
    move |input| to_string(input.clone()).max_length(limit, false, None)
}

pub fn comment_box(observer: Rc<dyn Observer>) -> Property {
    Property::new(INITIAL_COMMENT)
        .named("comment")
        .with_observer(observer)
}

/// Apply `edits` to a fresh comment box in order and record each state.
pub fn run_comment_session<I, S>(edits: I, options: &CommentOptions) -> CommentSession
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut comment = comment_box(Rc::clone(&options.observer));
    let validator = comment_validator(options.limit);

    let steps: Vec<EditStep> = edits
        .into_iter()
        .map(|edit| {
            let input: String = edit.into();
            let accepted = comment.set_with(input.as_str(), &validator);
            EditStep {
                input,
                accepted,
                value: comment.get().cloned(),
                error: comment.error(),
            }
        })
        .collect();

    if options.reset {
        comment.reset();
    }
    tracing::info!(
        limit = options.limit,
        valid = comment.has_valid_value(),
        "comment session finished"
    );

    CommentSession {
        limit: options.limit,
        steps,
        reset: options.reset,
        valid: comment.has_valid_value(),
        input: comment.input().cloned(),
        error: comment.error(),
        payload: comment.serialize(),
    }
}
