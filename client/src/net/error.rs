//! Failure taxonomy for a single chat round-trip.
//!
//! Every variant is absorbed by the chat controller and replaced with the
//! fallback bot message; the detail only reaches the console log.

/// Errors produced while asking the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request could not be built or the network call failed.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("chat request failed: status {status}")]
    Status { status: u16 },

    /// The response body was not valid JSON.
    #[error("chat response decode failed: {0}")]
    Decode(String),

    /// The response JSON had no string `answer` field.
    #[error("chat response has no answer")]
    MissingAnswer,

    /// No browser transport exists in this build (server render or native test).
    #[error("chat transport not available")]
    Unavailable,
}
