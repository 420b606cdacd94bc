//! # Validation Errors
//!
//! Errors raised when a string fails to parse into one of the domain
//! types defined in this crate.

use thiserror::Error;

/// A value failed domain validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not a well-formed verification identifier.
    #[error("invalid verification id {value:?}: {reason}")]
    InvalidVerificationId { value: String, reason: &'static str },

    /// The path is not one of the onboarding routes.
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}
