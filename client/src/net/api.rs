//! REST helpers for the chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `ask` reports `ChatError::Unavailable`
//! since the endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status and body checks are pure functions so they are covered by native
//! tests; the hydrate path only adds the fetch itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ChatError;
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatResponse;

/// POST `question` to `endpoint` and return the bot's answer.
///
/// Sends exactly one request with a JSON body `{"question": ...}`. No retry.
///
/// # Errors
///
/// Returns a [`ChatError`] on network failure, non-2xx status, a non-JSON
/// body, or a body without an `answer` string.
pub async fn ask(endpoint: &str, question: &str) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest { question };
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&payload)
            .map_err(|e| ChatError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| ChatError::Decode(e.to_string()))?;
        parse_answer(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, question);
        Err(ChatError::Unavailable)
    }
}

/// Accept any 2xx status, matching `Response.ok` in the browser.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn check_status(status: u16) -> Result<(), ChatError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ChatError::Status { status })
    }
}

/// Extract the `answer` string from a response body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_answer(body: &str) -> Result<String, ChatError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    serde_json::from_value::<ChatResponse>(value)
        .map(|resp| resp.answer)
        .map_err(|_| ChatError::MissingAnswer)
}
