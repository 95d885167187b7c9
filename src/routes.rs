//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten` - Shorten a URL
//! - `GET  /health`  - Health check: store and cache
//! - `GET  /{code}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for the browser front end
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and middleware without path normalization.
///
/// Static routes take precedence over `/{code}`; codes listed in
/// [`crate::utils::code_generator::RESERVED_CODES`] are never issued.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
