//! Wire DTOs for the `/api/chat` request/response contract.
//!
//! DESIGN
//! ======
//! The request borrows the question so the controller can keep ownership of
//! the text it already appended to the log.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Path of the chat endpoint, relative to the page origin.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub question: &'a str,
}

/// Successful response body from `POST /api/chat`.
///
/// Extra fields from the upstream service are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}
