//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the chat relay and health endpoints and stitches them
//! with Leptos SSR rendering under a single Axum router. Compiled client
//! assets live under `/pkg`; any other unmatched path is served from the
//! static directory (images, stylesheets).

pub mod chat;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes shared by every router variant.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat_proxy))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR at `/` + static files as fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState, static_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(hub_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || hub_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(static_dir)))
}

/// API routes + static files only, for running without a built client.
pub fn static_app(state: AppState, static_dir: &Path) -> Router {
    api_routes(state).fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
