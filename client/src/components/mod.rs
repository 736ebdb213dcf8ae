//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod back_to_top;
pub mod chat_widget;
pub mod counted_textarea;
pub mod search_list;
pub mod submit_form;
