//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The server keeps no per-user data; the only shared resource is the chat
//! upstream client.

use std::sync::Arc;

use crate::relay::ChatUpstream;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn ChatUpstream>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Arc<dyn ChatUpstream>) -> Self {
        Self { upstream }
    }
}
