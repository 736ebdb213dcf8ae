//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and small display
//! rules from component markup to improve reuse and testability.

pub mod back_to_top;
pub mod char_counter;
pub mod filter;
pub mod submit_state;
