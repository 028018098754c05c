//! Activity-level error type.

use thiserror::Error;

/// Errors returned by an activity's `execute` method (or by the parameter
/// binding that precedes it).
///
/// Both variants are caller errors and non-retryable:
/// - `MissingParameter` — the caller must supply the named input.
/// - `Configuration`    — the caller must fix the offending value first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// A required input parameter was absent or null.
    #[error("required input parameter '{0}' is missing or null")]
    MissingParameter(String),

    /// An input parameter violates a structural precondition, e.g. an
    /// unparsable regular expression or a non-string value.
    #[error("invalid value for input parameter '{name}' ({value}): {message}")]
    Configuration {
        name: String,
        /// The offending value, rendered for diagnostics.
        value: String,
        message: String,
    },
}
