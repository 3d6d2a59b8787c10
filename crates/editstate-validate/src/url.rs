use std::sync::LazyLock;

use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::string::{StringValidator, to_string_with};
use crate::validator::TrimOptions;

/// Scheme, then a host that does not start with a separator, then no
/// whitespace anywhere.
static URL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^(https?|ftp)://[^\s/$.?#][^\s]*$").expect("Invalid URL regex")
});

/// Start a string chain holding a URL. The input is trimmed on both ends.
pub fn to_url(input: impl Into<Value>) -> Result<StringValidator> {
    to_url_with(input, TrimOptions::both())
}

pub fn to_url_with(input: impl Into<Value>, trim: TrimOptions) -> Result<StringValidator> {
    let validator = to_string_with(input, trim);
    if !URL_REGEX.is_match(validator.get()) {
        return Err(ValidationError::new("Must be a valid URL"));
    }
    Ok(validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_shapes() {
        assert!(to_url("http://example.com").is_ok());
        assert!(to_url("  HTTPS://example.com/a?b=c  ").is_ok());
        assert!(to_url("ftp://files.example.org/pub").is_ok());
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["example.com", "http://", "http:// spaced.com", "mailto:a@b.c", ""] {
            let err = to_url(bad).unwrap_err();
            assert_eq!(err.message(), "Must be a valid URL", "{bad}");
        }
    }

    #[test]
    fn untrimmed_input_fails_when_trimming_disabled() {
        assert!(to_url_with(" http://example.com", TrimOptions::none()).is_err());
    }
}
