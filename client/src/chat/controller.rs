//! Chat widget controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `ChatSession` for one page load. A submission is split into
//! `begin` (synchronous: validate, append the user message, lock sending) and
//! `finish` (synchronous: render the answer or the fallback, unlock sending)
//! around a single awaited `ChatTransport::ask`. `submit` runs all three.
//!
//! The split lets the widget keep the controller in a `StoredValue` and await
//! the network without holding a borrow across the suspension point.
//!
//! INVARIANTS
//! ==========
//! - At most one request is in flight: `begin` refuses while `is_sending`.
//! - Every accepted submission ends in exactly one bot message and exactly
//!   one `set_sending(false)`.
//! - Failures never escape: they are logged and replaced by the fallback.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::transport::ChatTransport;
use super::view::ChatView;
use crate::net::error::ChatError;
use crate::state::chat::{ChatMessage, ChatSession};

pub struct ChatController<T, V> {
    session: ChatSession,
    fallback_message: String,
    transport: T,
    view: V,
}

impl<T: ChatTransport, V: ChatView> ChatController<T, V> {
    pub fn new(transport: T, view: V, fallback_message: impl Into<String>) -> Self {
        Self { session: ChatSession::default(), fallback_message: fallback_message.into(), transport, view }
    }

    #[must_use]
    pub fn session(&self) -> ChatSession {
        self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Flip the panel between open and closed.
    pub fn toggle_open(&mut self) {
        self.session.is_open = !self.session.is_open;
        self.view.show_panel(self.session.is_open);
    }

    /// Collapse the panel. In-flight requests keep running.
    pub fn close(&mut self) {
        self.session.is_open = false;
        self.view.show_panel(false);
    }

    /// Accept `text` for sending.
    ///
    /// Returns the trimmed question to ask, or `None` when the text is blank
    /// or a request is already in flight. On `Some`, the user message is in
    /// the log, the input is cleared, sending is locked, and the typing
    /// placeholder is visible; the caller must hand the transport outcome
    /// to [`ChatController::finish`].
    pub fn begin(&mut self, text: &str) -> Option<String> {
        let question = text.trim();
        if question.is_empty() {
            return None;
        }
        if self.session.is_sending {
            log::debug!("chat submit ignored: request already in flight");
            return None;
        }

        self.view.append_message(ChatMessage::user(question));
        self.view.clear_input();
        self.session.is_sending = true;
        self.view.set_sending(true);
        self.view.show_typing(true);
        Some(question.to_owned())
    }

    /// Render the outcome of the request started by [`ChatController::begin`].
    pub fn finish(&mut self, outcome: Result<String, ChatError>) {
        if !self.session.is_sending {
            log::warn!("chat finish without a pending request");
            return;
        }

        self.view.show_typing(false);
        let reply = match outcome {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("chat request failed: {e}");
                self.fallback_message.clone()
            }
        };
        self.view.append_message(ChatMessage::bot(reply));
        self.session.is_sending = false;
        self.view.set_sending(false);
    }

    /// Send `text` and render the reply. Blank text is silently ignored.
    pub async fn submit(&mut self, text: &str) {
        let Some(question) = self.begin(text) else {
            return;
        };
        let outcome = self.transport.ask(&question).await;
        self.finish(outcome);
    }
}
