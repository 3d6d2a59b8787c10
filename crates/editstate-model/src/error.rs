use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Display text of [`FieldError::Unset`].
pub const UNSET_MESSAGE: &str = "Initial error state";

/// Why a field currently has no accepted input.
///
/// `Unset` means the field was never successfully set; a presentation layer
/// should not alarm the user about it yet. `Invalid` carries the message of
/// the last rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{msg}", msg = UNSET_MESSAGE)]
    Unset,
    #[error("{0}")]
    Invalid(String),
}

impl FieldError {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The rejection message, or `None` for the unset state.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Error state of any node in a tree.
///
/// Properties report a [`FieldError`]. Array editors report one entry per
/// element, aligned with the list. Editors report their failing slots by
/// name. Serialized untagged, so JSON mirrors the shape of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorView {
    Field(FieldError),
    List(Vec<Option<ErrorView>>),
    Fields(IndexMap<String, ErrorView>),
}

impl From<FieldError> for ErrorView {
    fn from(error: FieldError) -> Self {
        Self::Field(error)
    }
}

/// Errors raised while assembling an editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("slot `{0}` is declared more than once")]
    DuplicateSlot(String),
    #[error("required slot `{0}` is not a property or nested editor")]
    UnknownRequiredSlot(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
