//! HTTP client for the document backend service.
//!
//! The backend is an opaque collaborator exposing the document list at
//! `/documento` and PDF binaries at `/documento/download/{name}.pdf`. Each
//! call is a single GET with no retries; PDF bodies are buffered whole
//! before being relayed.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Settings;
use crate::models::Document;

/// Failure talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request itself failed: connect, timeout, or body decode.
    #[error("erro ao comunicar com o backend: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("backend respondeu {status}")]
    Status { status: StatusCode, detail: String },
}

/// Client for the document backend, carrying the configured base URL.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client from settings. The base URL is taken as-is (already
    /// validated at configuration load time).
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(Duration::from_secs(settings.request_timeout))
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: settings.backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full document list from the backend.
    pub async fn fetch_documents(&self) -> Result<Vec<Document>, BackendError> {
        let url = format!("{}/documento", self.base_url);
        tracing::debug!("Fetching document list from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let documents: Vec<Document> = response.json().await?;
        tracing::debug!("Fetched {} documents", documents.len());
        Ok(documents)
    }

    /// Fetch one PDF from the backend download endpoint. Returns the full
    /// body; the caller decides how to relay it.
    pub async fn download_pdf(&self, filename: &str) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/documento/download/{}.pdf", self.base_url, filename);
        tracing::debug!("Proxying PDF download from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Turn a non-success response into a `Status` error, preserving the
/// backend's body text as detail.
async fn status_error(response: reqwest::Response) -> BackendError {
    let status = response.status();
    let detail = response.text().await.unwrap_or_default();
    BackendError::Status { status, detail }
}
