//! Floating chat widget: launcher button, collapsible panel, message log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wires DOM events to the `ChatController` held in a `StoredValue`. The
//! controller writes back through `SignalView`, and this component renders
//! reactively from the shared `RwSignal<ChatState>`.

use leptos::prelude::*;

use crate::chat::{ChatConfig, ChatController, ChatTransport, HttpTransport, SignalView};
use crate::state::chat::ChatState;

/// Chat launcher plus expandable panel with message history and input.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = use_context::<ChatConfig>().unwrap_or_default();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let controller = StoredValue::new(ChatController::new(
        HttpTransport::from_config(&config),
        SignalView::new(chat, input),
        config.fallback_message,
    ));

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.typing;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let mut pending = None;
        controller.update_value(|c| pending = c.begin(&text));
        let Some(question) = pending else {
            return;
        };

        let transport = controller.with_value(|c| c.transport().clone());
        leptos::task::spawn_local(async move {
            let outcome = transport.ask(&question).await;
            controller.update_value(|c| c.finish(outcome));
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let is_open = move || chat.get().session.is_open;
    let is_sending = move || chat.get().session.is_sending;

    view! {
        <div class="chat-widget">
            <button
                class="chat-widget__launcher"
                aria-label="Open chat"
                on:click=move |_| controller.update_value(|c| c.toggle_open())
            >
                <i class="fas fa-comments"></i>
            </button>

            <div class="chat-widget__panel" class:show=is_open>
                <div class="chat-widget__header">
                    <span class="chat-widget__title">"Hub Assistant"</span>
                    <button
                        class="chat-widget__close"
                        aria-label="Close chat"
                        on:click=move |_| controller.update_value(|c| c.close())
                    >
                        "×"
                    </button>
                </div>

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        chat.get()
                            .messages
                            .iter()
                            .map(|msg| {
                                let class = format!("message {}-message", msg.sender.as_str());
                                let content = msg.content.clone();
                                view! {
                                    <div class=class>
                                        <div class="message-content">{content}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    {move || {
                        chat.get()
                            .typing
                            .then(|| {
                                view! {
                                    <div class="message bot-message typing-indicator">
                                        <div class="message-content">
                                            <div class="typing-dots">
                                                <span></span>
                                                <span></span>
                                                <span></span>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Ask about projects, courses, events..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="btn btn--primary chat-widget__send" on:click=on_click disabled=is_sending>
                        {move || {
                            if is_sending() {
                                view! { <i class="fas fa-spinner fa-spin"></i> }.into_any()
                            } else {
                                view! {
                                    <i class="fas fa-paper-plane"></i>
                                    <span class="sr-only">"Send"</span>
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
