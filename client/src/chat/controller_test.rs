use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::chat::config::FALLBACK_MESSAGE;
use crate::state::chat::Sender;

// =============================================================
// Test doubles
// =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewEvent {
    Panel(bool),
    Sending(bool),
    Typing(bool),
    Append,
    ClearInput,
}

#[derive(Default)]
struct RecordingView {
    events: Vec<ViewEvent>,
    messages: Vec<ChatMessage>,
    sending: bool,
    typing: bool,
    open: bool,
}

impl RecordingView {
    fn count(&self, event: ViewEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl ChatView for RecordingView {
    fn show_panel(&mut self, open: bool) {
        self.open = open;
        self.events.push(ViewEvent::Panel(open));
    }

    fn set_sending(&mut self, sending: bool) {
        self.sending = sending;
        self.events.push(ViewEvent::Sending(sending));
    }

    fn show_typing(&mut self, visible: bool) {
        self.typing = visible;
        self.events.push(ViewEvent::Typing(visible));
    }

    fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.events.push(ViewEvent::Append);
    }

    fn clear_input(&mut self) {
        self.events.push(ViewEvent::ClearInput);
    }
}

struct MockTransport {
    responses: RefCell<Vec<Result<String, ChatError>>>,
    questions: RefCell<Vec<String>>,
}

impl MockTransport {
    fn new(responses: Vec<Result<String, ChatError>>) -> Self {
        Self { responses: RefCell::new(responses), questions: RefCell::new(Vec::new()) }
    }

    fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for MockTransport {
    async fn ask(&self, question: &str) -> Result<String, ChatError> {
        self.questions.borrow_mut().push(question.to_owned());
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() { Err(ChatError::Request("no mock response".into())) } else { responses.remove(0) }
    }
}

fn controller(responses: Vec<Result<String, ChatError>>) -> ChatController<MockTransport, RecordingView> {
    ChatController::new(MockTransport::new(responses), RecordingView::default(), FALLBACK_MESSAGE)
}

// =============================================================
// open / close
// =============================================================

#[test]
fn toggle_open_flips_panel_state() {
    let mut c = controller(vec![]);
    c.toggle_open();
    assert!(c.session().is_open);
    assert!(c.view().open);
    c.toggle_open();
    assert!(!c.session().is_open);
    assert_eq!(c.view().events, vec![ViewEvent::Panel(true), ViewEvent::Panel(false)]);
}

#[test]
fn close_always_hides_panel() {
    let mut c = controller(vec![]);
    c.close();
    assert!(!c.session().is_open);
    c.toggle_open();
    c.close();
    assert!(!c.session().is_open);
    assert!(!c.view().open);
}

// =============================================================
// submit: blank input
// =============================================================

#[test]
fn blank_submit_appends_nothing_and_sends_nothing() {
    let mut c = controller(vec![Ok("unused".into())]);
    block_on(c.submit(""));
    block_on(c.submit("   \t\n"));
    assert!(c.view().messages.is_empty());
    assert!(c.view().events.is_empty());
    assert!(c.transport().questions().is_empty());
    assert!(!c.session().is_sending);
}

// =============================================================
// submit: success and failure
// =============================================================

#[test]
fn successful_reply_is_appended_after_user_message() {
    let mut c = controller(vec![Ok("Hello".into())]);
    block_on(c.submit("Hi"));
    assert_eq!(c.view().messages, vec![ChatMessage::user("Hi"), ChatMessage::bot("Hello")]);
    assert_eq!(c.transport().questions(), vec!["Hi".to_owned()]);
}

#[test]
fn failure_status_renders_fallback_message() {
    let mut c = controller(vec![Err(ChatError::Status { status: 500 })]);
    block_on(c.submit("Hi"));
    assert_eq!(c.view().messages, vec![ChatMessage::user("Hi"), ChatMessage::bot(FALLBACK_MESSAGE)]);
}

#[test]
fn every_failure_kind_renders_fallback_message() {
    let failures = vec![
        ChatError::Request("offline".into()),
        ChatError::Decode("expected value".into()),
        ChatError::MissingAnswer,
        ChatError::Unavailable,
    ];
    for failure in failures {
        let mut c = controller(vec![Err(failure.clone())]);
        block_on(c.submit("Hi"));
        let last = c.view().messages.last().cloned();
        assert_eq!(last, Some(ChatMessage::bot(FALLBACK_MESSAGE)), "failure {failure:?}");
        assert!(!c.session().is_sending);
    }
}

#[test]
fn submit_sends_trimmed_question() {
    let mut c = controller(vec![Ok("ok".into())]);
    block_on(c.submit("  When is the demo day?  "));
    assert_eq!(c.transport().questions(), vec!["When is the demo day?".to_owned()]);
    assert_eq!(c.view().messages[0].content, "When is the demo day?");
}

#[test]
fn submit_renders_effects_in_order() {
    let mut c = controller(vec![Ok("Hello".into())]);
    block_on(c.submit("Hi"));
    assert_eq!(
        c.view().events,
        vec![
            ViewEvent::Append,
            ViewEvent::ClearInput,
            ViewEvent::Sending(true),
            ViewEvent::Typing(true),
            ViewEvent::Typing(false),
            ViewEvent::Append,
            ViewEvent::Sending(false),
        ]
    );
    assert!(!c.view().typing);
}

#[test]
fn send_affordance_reenabled_once_per_submission() {
    let mut c = controller(vec![Ok("a".into()), Err(ChatError::Status { status: 503 })]);
    block_on(c.submit("one"));
    block_on(c.submit("two"));
    assert_eq!(c.view().count(ViewEvent::Sending(true)), 2);
    assert_eq!(c.view().count(ViewEvent::Sending(false)), 2);
    assert!(!c.view().sending);
}

// =============================================================
// single-flight
// =============================================================

#[test]
fn begin_refuses_while_request_in_flight() {
    let mut c = controller(vec![]);
    assert_eq!(c.begin("first"), Some("first".to_owned()));
    assert!(c.session().is_sending);
    assert!(c.view().sending);

    assert_eq!(c.begin("second"), None);
    assert_eq!(c.view().messages, vec![ChatMessage::user("first")]);

    c.finish(Ok("reply".into()));
    assert!(!c.session().is_sending);
    assert_eq!(c.view().count(ViewEvent::Sending(false)), 1);
}

#[test]
fn finish_without_pending_request_is_ignored() {
    let mut c = controller(vec![]);
    c.finish(Ok("stray".into()));
    assert!(c.view().messages.is_empty());
    assert!(c.view().events.is_empty());
}

#[test]
fn replies_follow_submission_order() {
    let mut c = controller(vec![Ok("first reply".into()), Ok("second reply".into())]);
    block_on(c.submit("first"));
    block_on(c.submit("second"));
    let senders: Vec<Sender> = c.view().messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]);
    assert_eq!(c.view().messages[1].content, "first reply");
    assert_eq!(c.view().messages[3].content, "second reply");
}

#[test]
fn request_completes_even_if_panel_closed_meanwhile() {
    let mut c = controller(vec![]);
    c.toggle_open();
    let question = c.begin("Hi");
    assert!(question.is_some());
    c.close();
    c.finish(Ok("Hello".into()));
    assert_eq!(c.view().messages.len(), 2);
    assert!(!c.session().is_open);
}
