//! Route table for the portal.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{handlers, AppState};

/// Build the portal router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/static/style.css", get(handlers::stylesheet))
        // Download proxy, reachable by path parameter or by query string.
        .route(
            "/api/document/download/:filename",
            get(handlers::download_by_path),
        )
        .route("/api/download", get(handlers::download_by_query))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
