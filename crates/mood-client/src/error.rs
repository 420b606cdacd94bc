//! Client error types.

use crate::widget::WidgetError;

/// Errors from calling `/api/verify`.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-2xx status.
    #[error("{endpoint} returned {status}")]
    Rejected {
        endpoint: String,
        status: u16,
        /// The `error` field of the response envelope, if present.
        message: Option<String>,
    },
    /// Response body was not a verification envelope.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Reasons a verification view refuses or abandons a handshake.
///
/// Handshake failures reported by the server are not errors at this level;
/// they land the view in [`crate::ViewState::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum HandshakeError {
    /// A submission is already in flight for this view.
    #[error("a verification is already in progress")]
    Busy,
    /// The view was torn down before the handshake completed.
    #[error("verification view was closed")]
    Cancelled,
    /// The view already holds a verification.
    #[error("already verified")]
    AlreadyVerified,
    /// Onward navigation requested before verification succeeded.
    #[error("not verified yet")]
    NotVerified,
    /// The verification widget failed to produce a proof.
    #[error("verification widget failed: {0}")]
    Widget(#[from] WidgetError),
}
