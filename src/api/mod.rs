//! REST API Client
//!
//! Thin async wrappers over the remote API, organized by resource. Every
//! authenticated call takes the session and refuses to issue a request
//! without a credential.

mod auth;
mod project;
mod task;

use reqwest::Response;

use crate::error::ApiError;
use crate::session::Session;

// Re-export all public items
pub use auth::*;
pub use project::*;
pub use task::*;

/// Compile-time override for the API origin; defaults to same-origin paths
fn base_url() -> &'static str {
    option_env!("TASKBOARD_API_URL").unwrap_or("")
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

/// The credential is required up front: without one, no request is issued
pub(crate) fn bearer(session: &Session) -> Result<String, ApiError> {
    session.credential().ok_or(ApiError::MissingCredential)
}

/// Decode a non-success response into a display message, preferring the
/// server's `{"message": ...}` body over the bare status code.
pub(crate) async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Server(message)
}

/// Check the status and decode the body, or surface an [`ApiError`]
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
    if response.status().is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(error_from(response).await)
    }
}
