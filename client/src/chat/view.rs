//! Rendering seam for the chat controller.
//!
//! DESIGN
//! ======
//! The controller never touches the DOM. `SignalView` writes into the
//! `RwSignal<ChatState>` context and the `ChatWidget` component re-renders
//! reactively from it.

use leptos::prelude::{RwSignal, Set, Update};

use crate::state::chat::{ChatMessage, ChatState};

/// Side effects the chat controller asks the page to perform.
pub trait ChatView {
    /// Expand or collapse the chat panel.
    fn show_panel(&mut self, open: bool);
    /// Disable (`true`) or re-enable (`false`) the send affordance.
    fn set_sending(&mut self, sending: bool);
    /// Show or remove the transient typing placeholder.
    fn show_typing(&mut self, visible: bool);
    /// Append a message to the end of the visible log.
    fn append_message(&mut self, message: ChatMessage);
    /// Empty the text input.
    fn clear_input(&mut self);
}

/// `ChatView` backed by Leptos signals.
#[derive(Clone, Copy)]
pub struct SignalView {
    state: RwSignal<ChatState>,
    input: RwSignal<String>,
}

impl SignalView {
    #[must_use]
    pub fn new(state: RwSignal<ChatState>, input: RwSignal<String>) -> Self {
        Self { state, input }
    }
}

impl ChatView for SignalView {
    fn show_panel(&mut self, open: bool) {
        self.state.update(|s| s.session.is_open = open);
    }

    fn set_sending(&mut self, sending: bool) {
        self.state.update(|s| s.session.is_sending = sending);
    }

    fn show_typing(&mut self, visible: bool) {
        self.state.update(|s| s.typing = visible);
    }

    fn append_message(&mut self, message: ChatMessage) {
        self.state.update(|s| s.messages.push(message));
    }

    fn clear_input(&mut self) {
        self.input.set(String::new());
    }
}
