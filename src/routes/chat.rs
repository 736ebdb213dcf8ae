//! `POST /api/chat` — relay a question to the external QA service.
//!
//! Response contract:
//! - missing/invalid `question` → 400 `{"error":"Question is required"}`
//! - upstream 200 → 200 with the upstream JSON body
//! - upstream non-200 → same status, `{"error":"External API error"}`
//! - timeout → 408, transport failure → 500, non-JSON upstream body → 500

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::relay::RelayError;
use crate::state::AppState;

pub const QUESTION_REQUIRED: &str = "Question is required";
pub const EXTERNAL_API_ERROR: &str = "External API error";
pub const TIMEOUT_ERROR: &str = "Request timeout. Please try again.";
pub const CONNECT_ERROR: &str = "Failed to connect to chat service";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// `POST /api/chat` handler.
pub async fn chat_proxy(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(question) = extract_question(&body) else {
        return error_response(StatusCode::BAD_REQUEST, QUESTION_REQUIRED);
    };

    match state.upstream.ask(&question).await {
        Ok(answer) => Json(answer).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "chat relay failed");
            let (status, message) = relay_error_status(&e);
            error_response(status, message)
        }
    }
}

/// Pull the `question` string out of a JSON request body.
pub(crate) fn extract_question(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("question")?.as_str().map(str::to_owned)
}

/// Map a relay failure to the status and message returned to the browser.
pub(crate) fn relay_error_status(err: &RelayError) -> (StatusCode, &'static str) {
    match err {
        RelayError::Timeout => (StatusCode::REQUEST_TIMEOUT, TIMEOUT_ERROR),
        RelayError::Connect(_) => (StatusCode::INTERNAL_SERVER_ERROR, CONNECT_ERROR),
        RelayError::Upstream { status } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            EXTERNAL_API_ERROR,
        ),
        RelayError::Decode(_) | RelayError::HttpClientBuild(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
