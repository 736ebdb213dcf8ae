mod config;
mod relay;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HubConfig::from_env()?;

    let upstream = relay::HttpUpstream::new(&config.upstream)?;
    tracing::info!(upstream = upstream.url(), "chat relay configured");
    let state = state::AppState::new(Arc::new(upstream));

    // Non-fatal: without Leptos config the relay and static site still serve.
    let app = match routes::leptos_app(state.clone(), &config.static_dir) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos app not configured — serving static files only");
            routes::static_app(state, &config.static_dir)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "student hub listening");
    axum::serve(listener, app).await?;
    Ok(())
}
