//! HTTP Handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Html,
};
use serde::Serialize;

use crate::state::AppState;

/// Client-side routes that boot the SPA shell
pub const SPA_ROUTES: [&str; 3] = ["/", "/privacy-policy", "/delete-account"];

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Serve `index.html` for a client-side route
pub async fn spa_shell(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    let path = state.index_path();

    tokio::fs::read_to_string(&path).await.map(Html).map_err(|e| {
        tracing::error!(path = %path.display(), "cannot read SPA shell: {}", e);
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Frontend bundle not available".into(),
                code: "BUNDLE_MISSING".into(),
            }),
        )
    })
}
