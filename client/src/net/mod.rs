//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call, `error` names its failure modes, and
//! `types` defines the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
