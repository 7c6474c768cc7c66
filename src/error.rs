//! Client-side error taxonomy.
//!
//! Every API call resolves to one of four kinds so callers can branch on
//! what actually happened instead of string-matching a message:
//! - `Network` — the request never completed (DNS, refused, reset).
//! - `Http` — the server answered with a non-2xx status.
//! - `Decode` — a 2xx body that did not parse as the expected type.
//! - `Session` — local session storage failed during login/logout.

use thiserror::Error;

use crate::session::SessionError;

/// A failed API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: no HTTP response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The server completed the request with a non-2xx status.
    ///
    /// `message` is the backend's `error` field when the body carried one,
    /// otherwise the literal `HTTP <status>`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A successful status whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The local session store could not be read or written.
    #[error("session storage: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    /// True for a 401 response — the route guard and page callers use this
    /// to distinguish "credentials rejected" from everything else.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }

    /// Normalize a non-2xx response body into the message shown to callers.
    ///
    /// The backend answers errors as `{"error": "<message>"}`; anything
    /// else (HTML error pages, empty bodies) falls back to `HTTP <status>`.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("HTTP {status}"));

        ApiError::Http { status, message }
    }
}
