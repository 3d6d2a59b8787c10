//! Fluent validator chains for raw user input.
//!
//! A chain wraps one raw input, optionally trims and coerces it, then runs
//! checks in order. The first failing check ends the chain with a
//! [`ValidationError`] carrying a user-facing message.
//!
//! # Module Organization
//!
//! - [`validator`]: the generic [`Validator`] chain, trimming and coercive comparisons
//! - [`string`]: length, pattern, case and numerical-shape checks
//! - [`numeric`]: integer/float coercion and ordered bounds
//! - [`url`]: URL-shaped strings
//!
//! # Example
//!
//! ```
//! use editstate_validate::to_int;
//!
//! let quantity = to_int("10")?.greater_than(5, None)?;
//! assert_eq!(*quantity.get(), 10);
//!
//! let err = to_int("abc").unwrap_err();
//! assert_eq!(err.message(), "Must be an integer");
//! # Ok::<(), editstate_validate::ValidationError>(())
//! ```

pub mod error;
pub mod numeric;
pub mod string;
pub mod url;
pub mod validator;

pub use error::{Result, ValidationError};
pub use numeric::{FloatValidator, IntValidator, Numeric, to_float, to_int};
pub use string::{StringValidator, to_string, to_string_with};
pub use url::{to_url, to_url_with};
pub use validator::{TrimOptions, Truthy, Validator, loose_eq};
