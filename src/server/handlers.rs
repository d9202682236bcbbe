//! HTTP handlers for the portal routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::{templates, ApiError, AppState};
use crate::catalog;
use crate::models::{DateRange, FilterState, TypeFilter};

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Portal stylesheet.
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        templates::STYLE_CSS,
    )
}

/// Query parameters of the list page. All values are parsed leniently:
/// malformed dates, unknown types and bad page numbers fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub tipo: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search_term: self.q.clone().unwrap_or_default(),
            doc_type: self
                .tipo
                .as_deref()
                .map(TypeFilter::parse)
                .unwrap_or_default(),
            date_range: DateRange {
                from: parse_date(self.from.as_deref()),
                to: parse_date(self.to.as_deref()),
            },
        }
    }

    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| v.parse().ok())
}

/// Server-rendered document list. Fetches the full set from the backend on
/// every request, then filters, sorts and paginates in memory.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, ApiError> {
    let documents = state.backend.fetch_documents().await?;

    let filter = params.filter_state();
    let page = params.page();
    let selected = catalog::select(&documents, &filter);
    let stats = catalog::stats(&documents, selected.len());
    let total_pages = catalog::total_pages(selected.len());
    let visible = catalog::page_slice(&selected, page);

    Ok(Html(templates::portal_page(
        &filter,
        &stats,
        visible,
        page,
        total_pages,
    )))
}

/// Download proxy, path-parameter form: `/api/documents/download/{filename}`.
pub async fn download_by_path(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    download(&state, &filename).await
}

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    pub filename: Option<String>,
}

/// Download proxy, query-string form: `/api/download?filename={name}`.
pub async fn download_by_query(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<Response, ApiError> {
    let filename = params.filename.unwrap_or_default();
    download(&state, &filename).await
}

/// Forward the request to the backend download endpoint and relay the PDF
/// with download headers. The whole body is buffered before relaying.
async fn download(state: &AppState, filename: &str) -> Result<Response, ApiError> {
    if filename.is_empty() || filename.contains(['/', '\\']) || filename.contains("..") {
        return Err(ApiError::InvalidFilename);
    }

    let bytes = state.backend.download_pdf(filename).await?;

    let disposition = format!("attachment; filename=\"{}.pdf\"", header_safe(filename));
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Sanitize a filename for embedding in a header value. Quotes, control
/// characters and non-ASCII are replaced so the value stays a valid
/// quoted-string.
fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '"' || !c.is_ascii() || c.is_ascii_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
