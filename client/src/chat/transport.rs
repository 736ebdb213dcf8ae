//! Network seam for the chat controller.

use super::config::ChatConfig;
use crate::net::api;
use crate::net::error::ChatError;

/// One question in, one answer (or error) out. Enables mocking in tests.
///
/// Futures are `?Send` because browser fetch futures are tied to the
/// single-threaded WASM event loop.
#[async_trait::async_trait(?Send)]
pub trait ChatTransport {
    /// Ask the chat service a single question.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] for any failure to produce an answer.
    async fn ask(&self, question: &str) -> Result<String, ChatError>;
}

/// Browser transport that POSTs to the configured chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn ask(&self, question: &str) -> Result<String, ChatError> {
        api::ask(&self.endpoint, question).await
    }
}
