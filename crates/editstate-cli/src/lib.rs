//! Command-line front end for editstate.
//!
//! `comment` replays edits against a length-limited comment box and `check`
//! runs a validator chain assembled from flags over one raw value. Both
//! return serializable reports; printing lives in the binary.

pub mod check;
pub mod comment;
pub mod logging;

/// Process exit status: the edits or input were accepted.
pub const EXIT_ACCEPTED: i32 = 0;
/// Process exit status: the final state is invalid or the input was rejected.
pub const EXIT_REJECTED: i32 = 1;
/// Process exit status: bad arguments, or output or log file I/O failed.
pub const EXIT_USAGE: i32 = 2;
