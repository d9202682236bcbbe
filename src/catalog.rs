//! Filtering, ordering and pagination over the fetched document set.
//!
//! The whole catalog fits in memory for one render, so everything here is a
//! pure function of the document slice and the current [`FilterState`]. The
//! list page recomputes all of it on every request.

use crate::models::{Document, DocumentStats, DocumentType, FilterState, TypeCounts};

/// Fixed page size of the document list.
pub const ITEMS_PER_PAGE: usize = 5;

/// Maximum number of page buttons shown per pagination window.
pub const PAGE_WINDOW: usize = 10;

/// Lowercase a string and strip the diacritics that occur in Portuguese
/// document metadata, so "Educação" and "educacao" compare equal.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            c => c,
        })
        .collect()
}

/// Strip the separators used in document numbers ("5.660", "123/2024") so a
/// search for "5660" still finds "5.660".
pub fn normalize_number(number: &str) -> String {
    number
        .chars()
        .filter(|c| *c != '.' && *c != '/')
        .collect()
}

/// Whether a document satisfies every dimension of the filter: text, type
/// and date range.
pub fn matches(doc: &Document, filter: &FilterState) -> bool {
    text_matches(doc, &filter.search_term)
        && filter.doc_type.matches(doc.doc_type)
        && filter.date_range.contains(doc.date)
}

fn text_matches(doc: &Document, term: &str) -> bool {
    let term = fold(term);
    if term.is_empty() {
        return true;
    }
    fold(&doc.title).contains(&term)
        || fold(&doc.description).contains(&term)
        || fold(&doc.number).contains(&term)
        || normalize_number(&fold(&doc.number)).contains(&normalize_number(&term))
}

/// Apply the filter and order the survivors by date, newest first. The sort
/// is stable, so documents sharing a date keep their backend order.
pub fn select(documents: &[Document], filter: &FilterState) -> Vec<Document> {
    let mut selected: Vec<Document> = documents
        .iter()
        .filter(|doc| matches(doc, filter))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

/// Number of pages needed for `filtered` documents.
pub fn total_pages(filtered: usize) -> usize {
    filtered.div_ceil(ITEMS_PER_PAGE)
}

/// The slice of the sorted, filtered documents visible on `page` (1-indexed).
/// Pages past the end are empty.
pub fn page_slice(sorted: &[Document], page: usize) -> &[Document] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(ITEMS_PER_PAGE);
    let end = start.saturating_add(ITEMS_PER_PAGE).min(sorted.len());
    if start >= sorted.len() {
        &[]
    } else {
        &sorted[start..end]
    }
}

/// Aggregate counts for the stat cards. Per-type counts are taken over the
/// unfiltered input; only `filtered` reacts to the active filter.
pub fn stats(documents: &[Document], filtered: usize) -> DocumentStats {
    let count = |t: DocumentType| documents.iter().filter(|d| d.doc_type == t).count();
    DocumentStats {
        total: documents.len(),
        filtered,
        by_type: TypeCounts {
            portarias: count(DocumentType::Portaria),
            leis_ordinarias: count(DocumentType::LeiOrdinaria),
            leis_complementares: count(DocumentType::LeiComplementar),
            decretos: count(DocumentType::Decreto),
        },
    }
}

/// Bounded window of page numbers around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First page number shown.
    pub start: usize,
    /// Last page number shown (inclusive).
    pub end: usize,
    /// Target of the leading ellipsis button, when the window is not the first.
    pub prev_jump: Option<usize>,
    /// Target of the trailing ellipsis button, when the window is not the last.
    pub next_jump: Option<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Compute the window of at most [`PAGE_WINDOW`] consecutive page buttons
/// containing `current`, clamped to `total` pages.
pub fn page_window(current: usize, total: usize) -> PageWindow {
    let current = current.clamp(1, total.max(1));
    let start = (current - 1) / PAGE_WINDOW * PAGE_WINDOW + 1;
    let end = (start + PAGE_WINDOW - 1).min(total.max(1));
    PageWindow {
        start,
        end,
        prev_jump: (start > 1).then_some(start - 1),
        next_jump: (end < total).then_some(end + 1),
        has_prev: current > 1,
        has_next: current < total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRange, TypeFilter};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn doc(number: &str, title: &str, doc_type: DocumentType, date_str: &str) -> Document {
        Document {
            id: number.to_string(),
            doc_type,
            number: number.to_string(),
            title: title.to_string(),
            description: format!("Descrição de {title}"),
            date: date(date_str),
            url: format!("http://backend.test/documento/{number}"),
        }
    }

    fn sample() -> Vec<Document> {
        vec![
            doc("123/2024", "LEI Nº 123/2024", DocumentType::LeiOrdinaria, "2024-05-01"),
            doc("456/2023", "LEI Nº 456/2023", DocumentType::LeiOrdinaria, "2023-01-10"),
            doc("5.660", "DECRETO Nº 5.660", DocumentType::Decreto, "2023-11-20"),
            doc("78/2024", "PORTARIA DE EDUCAÇÃO", DocumentType::Portaria, "2024-05-01"),
        ]
    }

    #[test]
    fn test_fold_strips_diacritics_and_case() {
        assert_eq!(fold("Educação"), "educacao");
        assert_eq!(fold("PORTARIA Nº 12"), "portaria nº 12");
        assert_eq!(fold("órgão público"), "orgao publico");
    }

    #[test]
    fn test_normalize_number() {
        assert_eq!(normalize_number("5.660"), "5660");
        assert_eq!(normalize_number("123/2024"), "1232024");
    }

    #[test]
    fn test_empty_filter_keeps_everything_sorted_desc() {
        let docs = sample();
        let selected = select(&docs, &FilterState::default());
        assert_eq!(selected.len(), docs.len());
        for pair in selected.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_two_documents_unfiltered_newest_first() {
        let docs = vec![
            doc("123/2024", "LEI Nº 123/2024", DocumentType::LeiOrdinaria, "2024-05-01"),
            doc("456/2023", "LEI Nº 456/2023", DocumentType::LeiOrdinaria, "2023-01-10"),
        ];
        let selected = select(&docs, &FilterState::default());
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].number, "123/2024");
        assert_eq!(selected[1].number, "456/2023");
    }

    #[test]
    fn test_search_is_case_and_diacritic_insensitive() {
        let docs = sample();
        let filter = FilterState {
            search_term: "educacao".to_string(),
            ..Default::default()
        };
        let selected = select(&docs, &filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].number, "78/2024");
    }

    #[test]
    fn test_search_matches_number_without_separators() {
        let docs = sample();
        let filter = FilterState {
            search_term: "5660".to_string(),
            ..Default::default()
        };
        let selected = select(&docs, &filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].number, "5.660");
    }

    #[test]
    fn test_search_matches_description() {
        let docs = sample();
        let filter = FilterState {
            search_term: "descrição de lei nº 456".to_string(),
            ..Default::default()
        };
        assert_eq!(select(&docs, &filter).len(), 1);
    }

    #[test]
    fn test_type_filter() {
        let docs = sample();
        let filter = FilterState {
            doc_type: TypeFilter::Only(DocumentType::Decreto),
            ..Default::default()
        };
        let selected = select(&docs, &filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].doc_type, DocumentType::Decreto);
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let docs = sample();
        let filter = FilterState {
            date_range: DateRange {
                from: Some(date("2023-11-20")),
                to: Some(date("2024-05-01")),
            },
            ..Default::default()
        };
        let selected = select(&docs, &filter);
        assert_eq!(selected.len(), 3);
        assert!(selected.iter().all(|d| d.number != "456/2023"));
    }

    #[test]
    fn test_all_filters_must_hold() {
        let docs = sample();
        let filter = FilterState {
            search_term: "lei".to_string(),
            doc_type: TypeFilter::Only(DocumentType::LeiOrdinaria),
            date_range: DateRange {
                from: Some(date("2024-01-01")),
                to: None,
            },
        };
        let selected = select(&docs, &filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].number, "123/2024");
    }

    #[test]
    fn test_stats_by_type_ignores_filter() {
        let docs = sample();
        let filter = FilterState {
            doc_type: TypeFilter::Only(DocumentType::Portaria),
            ..Default::default()
        };
        let filtered = select(&docs, &filter);
        let stats = stats(&docs, filtered.len());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.filtered, 1);
        assert_eq!(stats.by_type.leis_ordinarias, 2);
        assert_eq!(stats.by_type.decretos, 1);
        assert_eq!(stats.by_type.portarias, 1);
        assert_eq!(stats.by_type.leis_complementares, 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(11), 3);
    }

    #[test]
    fn test_page_slice_bounds() {
        let docs: Vec<Document> = (0..12)
            .map(|i| doc(&format!("{i}/2024"), "LEI", DocumentType::LeiOrdinaria, "2024-01-01"))
            .collect();
        assert_eq!(page_slice(&docs, 1).len(), 5);
        assert_eq!(page_slice(&docs, 2).len(), 5);
        assert_eq!(page_slice(&docs, 3).len(), 2);
        assert!(page_slice(&docs, 4).is_empty());
        // page 0 is treated as page 1
        assert_eq!(page_slice(&docs, 0).len(), 5);
    }

    #[test]
    fn test_pages_partition_the_selection() {
        let docs = sample();
        let sorted = select(&docs, &FilterState::default());
        let mut joined = Vec::new();
        for page in 1..=total_pages(sorted.len()) {
            joined.extend_from_slice(page_slice(&sorted, page));
        }
        assert_eq!(joined, sorted);
    }

    #[test]
    fn test_page_window_first_window() {
        let w = page_window(3, 7);
        assert_eq!((w.start, w.end), (1, 7));
        assert_eq!(w.prev_jump, None);
        assert_eq!(w.next_jump, None);
        assert!(w.has_prev);
        assert!(w.has_next);
    }

    #[test]
    fn test_page_window_middle_window() {
        let w = page_window(12, 25);
        assert_eq!((w.start, w.end), (11, 20));
        assert_eq!(w.prev_jump, Some(10));
        assert_eq!(w.next_jump, Some(21));
    }

    #[test]
    fn test_page_window_boundaries() {
        // page 10 still belongs to the first window
        assert_eq!(page_window(10, 25).start, 1);
        // page 11 opens the second window
        assert_eq!(page_window(11, 25).start, 11);
        let last = page_window(25, 25);
        assert_eq!((last.start, last.end), (21, 25));
        assert!(!last.has_next);
        assert_eq!(last.next_jump, None);
    }

    #[test]
    fn test_page_window_single_page() {
        let w = page_window(1, 1);
        assert_eq!((w.start, w.end), (1, 1));
        assert!(!w.has_prev);
        assert!(!w.has_next);
    }

    #[test]
    fn test_page_window_empty_result_set() {
        let w = page_window(1, 0);
        assert_eq!((w.start, w.end), (1, 1));
        assert!(!w.has_prev);
        assert!(!w.has_next);
    }
}
