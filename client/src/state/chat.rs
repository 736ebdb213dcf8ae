//! Chat widget state: session flags and the rendered message log.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatSession` is the controller-owned source of truth for open/sending
//! flags. `ChatState` is the reactive mirror the widget renders from; it is
//! written only through the `ChatView` implementation in `chat::view`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier used by the widget (`message--user`, `message--bot`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single entry in the message log. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { content: content.into(), sender: Sender::User }
    }

    #[must_use]
    pub fn bot(content: impl Into<String>) -> Self {
        Self { content: content.into(), sender: Sender::Bot }
    }
}

/// Per-page-load chat session flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatSession {
    /// Whether the chat panel is expanded.
    pub is_open: bool,
    /// True between request dispatch and its completion.
    pub is_sending: bool,
}

/// Rendered state of the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub session: ChatSession,
    /// Append-only log, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Transient typing placeholder shown while a reply is pending.
    pub typing: bool,
}
