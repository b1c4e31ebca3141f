//! Error types for the template and HTTP helpers.
//!
//! The value operations themselves never construct errors: absence is
//! reported through `Option` and a failed deep copy aborts. Only the
//! helpers with genuinely recoverable failures surface a [`ValuesError`].

use std::fmt::Display;

use thiserror::Error;

/// Recoverable failures from the stateless helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValuesError {
    /// A template's placeholder syntax is malformed.
    #[error("malformed template: {message}")]
    TemplateSyntax {
        /// Description of the offending construct and its position.
        message: String,
    },

    /// A fetch completed but the server answered with a non-success status.
    #[error("GET '{url}' returned status {status}")]
    HttpStatus {
        /// URL that was fetched.
        url: String,
        /// Status code the server answered with.
        status: reqwest::StatusCode,
    },

    /// The request never produced a usable response.
    #[error("HTTP request failed: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Join error messages into a single `"; "`-separated string.
///
/// Empty input yields the empty string. Useful when several independent
/// failures need to be reported through one message.
#[must_use]
pub fn join_errors<E: Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
