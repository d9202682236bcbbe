//! Web server for the public document portal.
//!
//! Provides the server-rendered document list with:
//! - Free-text search, type and date-range filtering via query parameters
//! - Fixed-size pagination with a windowed page selector
//! - PDF download proxy routes relaying the backend's binaries

mod error;
mod handlers;
mod routes;
mod templates;

pub use error::ApiError;
pub use routes::create_router;

use std::net::SocketAddr;

use crate::backend::BackendClient;
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            backend: BackendClient::new(settings),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
