//! Data model for documents published on the portal.
//!
//! Documents are fetched from the backend as a JSON array and live only for
//! the duration of one render; nothing here is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of government document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Portaria,
    LeiOrdinaria,
    LeiComplementar,
    Decreto,
}

impl DocumentType {
    /// All variants, in the order the type selector presents them.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Portaria,
        DocumentType::LeiOrdinaria,
        DocumentType::LeiComplementar,
        DocumentType::Decreto,
    ];

    /// Wire value, as sent by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Portaria => "PORTARIA",
            DocumentType::LeiOrdinaria => "LEI_ORDINARIA",
            DocumentType::LeiComplementar => "LEI_COMPLEMENTAR",
            DocumentType::Decreto => "DECRETO",
        }
    }

    /// Plural display label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Portaria => "Portarias",
            DocumentType::LeiOrdinaria => "Leis Ordinárias",
            DocumentType::LeiComplementar => "Leis Complementares",
            DocumentType::Decreto => "Decretos",
        }
    }

    /// Parse a wire value. Unknown strings yield `None`.
    pub fn from_str_opt(s: &str) -> Option<DocumentType> {
        DocumentType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// A single government record with metadata and an associated PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Free-form document number, may contain separators ("123/2024", "5.660").
    pub number: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub url: String,
}

impl Document {
    /// Filename stem used by the download proxy: the number with its
    /// separators removed, followed by the ISO date.
    pub fn download_slug(&self) -> String {
        let number: String = self
            .number
            .chars()
            .filter(|c| *c != '/' && *c != '.')
            .collect();
        format!("{}-{}", number, self.date.format("%Y-%m-%d"))
    }
}

/// Type dimension of the filter: everything, or one document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(DocumentType),
}

impl TypeFilter {
    /// Lenient parse from a query-string value; unknown values mean `All`.
    pub fn parse(s: &str) -> TypeFilter {
        match DocumentType::from_str_opt(s) {
            Some(t) => TypeFilter::Only(t),
            None => TypeFilter::All,
        }
    }

    pub fn matches(&self, doc_type: DocumentType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == doc_type,
        }
    }

    /// Query-string value for this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "ALL",
            TypeFilter::Only(t) => t.as_str(),
        }
    }
}

/// Inclusive date range; an absent bound is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// The full filter state for one render of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub doc_type: TypeFilter,
    pub date_range: DateRange,
}

/// Per-type document counts, always over the unfiltered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub portarias: usize,
    pub leis_ordinarias: usize,
    pub leis_complementares: usize,
    pub decretos: usize,
}

impl TypeCounts {
    pub fn get(&self, doc_type: DocumentType) -> usize {
        match doc_type {
            DocumentType::Portaria => self.portarias,
            DocumentType::LeiOrdinaria => self.leis_ordinarias,
            DocumentType::LeiComplementar => self.leis_complementares,
            DocumentType::Decreto => self.decretos,
        }
    }
}

/// Aggregate counts shown on the list page, recomputed every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub total: usize,
    pub filtered: usize,
    pub by_type: TypeCounts,
}
