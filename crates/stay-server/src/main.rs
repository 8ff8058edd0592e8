//! Swift Stay Web Server
//!
//! Axum host for the WASM frontend. The three client routes return the SPA
//! shell so deep links work; everything else is served from the bundle
//! directory, falling back to the shell.

mod config;
mod handlers;
mod state;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{SPA_ROUTES, health_check, spa_shell};
use crate::state::AppState;

/// Build the router for a bundle directory
fn app(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_dir.as_path())
        .fallback(ServeFile::new(state.index_path()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new().route("/health", get(health_check));
    for path in SPA_ROUTES {
        router = router.route(path, get(spa_shell));
    }

    router
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "⚠ No index.html in {} - build the frontend with `trunk build --release`",
            config.static_dir.display()
        );
    }

    let state = AppState::new(config.static_dir.clone());
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("🚀 swift-stay web running on http://{}", config.bind_addr);
    tracing::info!("  Serving bundle from {}", config.static_dir.display());
    for path in SPA_ROUTES {
        tracing::info!("  GET  {}", path);
    }

    axum::serve(listener, app(state)).await?;

    Ok(())
}
