//! Chat widget configuration.

use crate::net::types::CHAT_ENDPOINT;

/// Bot reply shown whenever the real answer cannot be obtained.
pub const FALLBACK_MESSAGE: &str = "I'm sorry, I'm having trouble connecting right now. Please try again later.";

/// Endpoint and fallback text used by the chat widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub fallback_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { endpoint: CHAT_ENDPOINT.to_owned(), fallback_message: FALLBACK_MESSAGE.to_owned() }
    }
}
