use memchr::memmem;
use thiserror::Error;

use crate::config::MarkerRule;

/// User-visible validation failures for a page's front matter.
///
/// This is deliberately not a YAML parser: a page either has content and the
/// required marker substrings, or it doesn't.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Empty page content")]
    Empty,

    #[error("Missing required {0} marker")]
    MissingMarker(String),
}

/// Check a page body against the configured marker rules.
///
/// Rules are checked in order and the first failure wins, so the rendered
/// message always names a single actionable problem.
pub fn validate(content: &str, rules: &[MarkerRule]) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    for rule in rules {
        if memmem::find(content.as_bytes(), rule.marker.as_bytes()).is_none() {
            return Err(ValidationError::MissingMarker(rule.label.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
