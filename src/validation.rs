//! Input validation for simulation runs.
//!
//! Turns raw form text into a [`RunInput`]. Detects:
//! - Missing request list
//! - Request list with no numeric entry
//! - Unparsable head position
//!
//! Non-numeric request tokens are dropped silently; only an empty
//! result is an error.

use crate::models::{RunInput, Track};
use crate::policy::Policy;

/// Validation result.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Request text is empty.
    EmptyRequests,
    /// Request text contains no numeric token.
    InvalidRequests,
    /// Head text is not an integer.
    InvalidHead,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn empty_requests() -> Self {
        Self::new(
            ValidationErrorKind::EmptyRequests,
            "Please enter disk requests!",
        )
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parses a comma-separated request list.
///
/// Tokens are trimmed; empty and non-integer tokens are dropped.
/// Order and duplicates are preserved.
pub fn parse_requests(input: &str) -> Result<Vec<Track>, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::empty_requests());
    }

    let requests: Vec<Track> = input
        .split(',')
        .filter_map(|token| token.trim().parse::<Track>().ok())
        .collect();

    if requests.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidRequests,
            "Invalid requests format!",
        ));
    }

    Ok(requests)
}

/// Parses the starting head position.
pub fn parse_head(input: &str) -> Result<Track, ValidationError> {
    let trimmed = input.trim();
    trimmed.parse::<Track>().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidHead,
            format!("Invalid head position: '{trimmed}'"),
        )
    })
}

/// Validates raw form values for a run.
///
/// Checks:
/// 1. Head parses as an integer
/// 2. Request text is present
/// 3. At least one request token is numeric
///
/// Unknown policy names are not an error; they order pass-through.
///
/// # Returns
/// The parsed [`RunInput`], or every detected issue.
pub fn validate_run_input(head: &str, requests: &str, policy: &str) -> ValidationResult<RunInput> {
    let mut errors = Vec::new();

    let head = parse_head(head).map_err(|e| errors.push(e)).ok();
    let requests = parse_requests(requests).map_err(|e| errors.push(e)).ok();

    match (head, requests) {
        (Some(head), Some(requests)) if errors.is_empty() => {
            Ok(RunInput::new(head, requests, Policy::from_name(policy)))
        }
        _ => Err(errors),
    }
}
