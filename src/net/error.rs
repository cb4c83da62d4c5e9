//! Error type shared by every REST call.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are kept distinct so callers can
//! log them precisely, but session code collapses all of them into
//! "not authenticated".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by API client operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request because no valid session exists.
    #[error("unauthorized")]
    Unauthorized,

    /// The server returned a non-success HTTP status other than 401.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The request never produced a response (network, CORS, abort).
    #[error("request transport failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is not available in this build (no browser runtime).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the failure means the session is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Map an HTTP status to an error, or `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            _ => Some(Self::Status { status }),
        }
    }
}
