use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::ValidationError;

// Scheme, "://", one character that cannot open a host (no space, '$', '.', '?', '#'),
// one more arbitrary character, then any run of non-space characters.
const TARGET_PATTERN: &str = r"^(https?|chrome)://[^\s$.?#].[^\s]*$";

static TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TARGET_PATTERN).expect("Failed to compile target pattern - this is a bug")
});

/// A trimmed, URL-shaped target that is safe to forward to the scraping service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTarget(String);

impl ValidatedTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decides whether raw user text is an admissible scrape target.
///
/// Only surrounding whitespace is removed; the accepted text is forwarded
/// as-is (no case folding, no trailing-slash handling).
pub fn validate(raw: &str) -> Result<ValidatedTarget, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !TARGET_RE.is_match(trimmed) {
        return Err(ValidationError::MalformedUrl);
    }
    Ok(ValidatedTarget(trimmed.to_string()))
}
