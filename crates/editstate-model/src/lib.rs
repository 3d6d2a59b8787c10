//! Validated editable state.
//!
//! A user edits a value one attempt at a time. Each attempt is either accepted,
//! producing a new valid value, or rejected, producing an error while the last
//! valid value is kept. This crate models that state:
//!
//! - [`Property`]: one value with its last input and current error
//! - [`Editor`]: named properties, nested editors and behaviour slots
//! - [`ArrayEditor`]: an ordered list of heterogeneous elements
//!
//! Composites never validate; they derive validity and serialized output from
//! their children through the [`Editable`] capability. Checks themselves live
//! in [`editstate_validate`].
//!
//! # Example
//!
//! ```
//! use editstate_model::{Editable, FieldError, Property};
//! use editstate_validate::to_string;
//!
//! let mut comment = Property::new("Initial value");
//! let accepted = comment.set_with("far too long for this comment box", |v| {
//!     to_string(v.clone()).max_length(20, false, None)
//! });
//!
//! assert!(!accepted);
//! assert_eq!(comment.get().and_then(|v| v.as_str()), Some("Initial value"));
//! assert_eq!(
//!     comment.error(),
//!     Some(FieldError::Invalid("Value exceeds 20 characters".to_string()))
//! );
//! ```

pub mod array_editor;
pub mod editable;
pub mod editor;
pub mod error;
pub mod observer;
pub mod property;
pub mod serializer;

pub use array_editor::{ArrayEditor, Element};
pub use editable::Editable;
pub use editor::{Behavior, Editor, EditorBuilder, Slot};
pub use error::{ErrorView, FieldError, ModelError, Result, UNSET_MESSAGE};
pub use observer::{NoopObserver, Observer, TracingObserver};
pub use property::{Accepted, Property};
pub use serializer::{Serializable, serialize};
