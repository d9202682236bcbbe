//! Transparencia: a public government document portal.
//!
//! Fetches the document list from a backend service, renders it with
//! search/filter/pagination, and proxies PDF downloads.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod models;
pub mod server;
