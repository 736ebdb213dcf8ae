//! Chat relay — pass-through from `/api/chat` to the external QA service.
//!
//! DESIGN
//! ======
//! The browser cannot call the QA service directly (CORS), so the server
//! forwards the question verbatim and returns the upstream JSON verbatim.
//! The `ChatUpstream` trait is the seam tests mock; `HttpUpstream` is the
//! reqwest implementation.

pub mod http;

pub use http::HttpUpstream;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while relaying a chat question.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The upstream did not answer within the request timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// The upstream could not be reached or the request failed mid-flight.
    #[error("upstream request failed: {0}")]
    Connect(String),

    /// The upstream returned a non-200 status.
    #[error("upstream response error: status {status}")]
    Upstream { status: u16 },

    /// The upstream returned 200 with a body that is not JSON.
    #[error("upstream response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// UPSTREAM TRAIT
// =============================================================================

/// Async seam for the external chat service. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ChatUpstream: Send + Sync {
    /// Forward `question` and return the upstream's JSON response body.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] on timeout, transport failure, non-200 status,
    /// or a non-JSON body.
    async fn ask(&self, question: &str) -> Result<serde_json::Value, RelayError>;
}
