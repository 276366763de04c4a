//! API Error Types

use thiserror::Error;

/// Failure produced at the API boundary. Every failure is handled where
/// the request was issued; nothing propagates to a global handler, and no
/// request is retried without a new user action.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential held; the request was never issued.
    #[error("You are not signed in")]
    MissingCredential,

    /// The server rejected the request; carries the server's message.
    #[error("{0}")]
    Server(String),

    /// Network or response-decoding failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
