//! Error types for backend calls made by the UI.
//!
//! # Design
//! - Only transport-level failures live here; expected rejections (bad
//!   credentials) are ordinary return values.
//! - Keep the enum DOM-free so controllers can be tested natively.

use thiserror::Error;

/// Failure talking to the CafeChain backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, aborted).
    #[error("network request failed: {detail}")]
    Network {
        /// Transport error detail.
        detail: String,
    },
    /// The request was aborted after exceeding the configured timeout.
    #[error("request timed out after {after_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        after_ms: u32,
    },
    /// The backend answered with an unexpected status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, when one was provided.
        message: Option<String>,
    },
    /// The response body could not be decoded.
    #[error("invalid response body: {detail}")]
    Decode {
        /// Decoder error detail.
        detail: String,
    },
}

impl ApiError {
    /// Whether the status is one the auth endpoint uses for rejected credentials.
    #[must_use]
    pub const fn is_credential_rejection(&self) -> bool {
        matches!(self, Self::Status { status: 400 | 401 | 403 | 404, .. })
    }
}

/// Errors surfaced by the auth controller; same taxonomy as [`ApiError`].
pub type AuthError = ApiError;
