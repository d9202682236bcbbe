//! HTML templates for the portal.
//!
//! Server-rendered pages built with plain `format!` strings: the stat
//! cards, the filter form, the document cards and the windowed pagination
//! control. Filter state travels in query parameters, so the filter form
//! omits `page` (any filter change lands on page 1) while pagination links
//! carry the filter through.

use chrono::{Datelike, NaiveDate};

use crate::catalog;
use crate::models::{Document, DocumentStats, DocumentType, FilterState, TypeFilter};

/// Portal stylesheet, served at /static/style.css.
pub const STYLE_CSS: &str = r#"
:root { --blue: #2563eb; --ink: #1f2937; --muted: #6b7280; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--ink); background: #f0f6ff; }
main { max-width: 60rem; margin: 0 auto; padding: 1.5rem; }
.portal-header { text-align: center; padding: 2rem 1rem 0; }
.portal-header h1 { color: var(--blue); margin-bottom: 0.25rem; }
.portal-header p { color: var(--muted); margin-top: 0; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.stat-card { background: var(--blue); color: #fff; border-radius: 0.75rem; padding: 1rem 1.25rem; }
.stat-card h3 { margin: 0; font-size: 0.95rem; font-weight: 500; }
.stat-value { font-size: 2rem; font-weight: 700; margin: 0.5rem 0 0; }
.stat-card dl { display: grid; grid-template-columns: auto auto; margin: 0.5rem 0 0; gap: 0.25rem 1rem; }
.stat-card dd { margin: 0; font-weight: 700; text-align: right; }
.filters { background: #fff; border-radius: 0.75rem; padding: 1.25rem; margin-bottom: 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.08); }
.filters input, .filters select { width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.4rem; }
.filters .row { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; margin-top: 1rem; }
.filters .actions { margin-top: 1rem; text-align: right; }
.document-card { background: #fff; border-radius: 0.75rem; padding: 1.25rem; margin-bottom: 1rem; box-shadow: 0 1px 4px rgba(0,0,0,0.08); }
.document-card h2 { margin: 0 0 0.25rem; font-size: 1.15rem; }
.doc-number { color: var(--muted); margin: 0 0 0.75rem; }
.empty-state { background: #fff; border-radius: 0.75rem; padding: 3rem 1rem; text-align: center; color: var(--muted); }
.btn { display: inline-block; padding: 0.4rem 0.9rem; border: 1px solid #d1d5db; border-radius: 0.4rem; background: #fff; color: var(--ink); text-decoration: none; cursor: pointer; }
.btn.current { background: var(--blue); color: #fff; border-color: var(--blue); }
.btn.disabled { color: #d1d5db; pointer-events: none; }
.pagination { display: flex; justify-content: center; gap: 0.4rem; margin: 2rem 0; flex-wrap: wrap; }
"#;

/// Base HTML page with the portal header.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header class="portal-header">
        <h1>Portal da Transparência</h1>
        <p>Acesse documentos oficiais, leis e regulamentações</p>
    </header>
    <main>
        {}
    </main>
</body>
</html>"#,
        html_escape(title),
        content
    )
}

/// Render the full list page for one request.
pub fn portal_page(
    filter: &FilterState,
    stats: &DocumentStats,
    visible: &[Document],
    current_page: usize,
    total_pages: usize,
) -> String {
    let mut content = String::new();
    content.push_str(&stats_section(stats));
    content.push_str(&filter_section(filter));

    if stats.filtered == 0 {
        content.push_str(
            r#"
    <div class="empty-state">
        <p>Nenhum documento encontrado com os critérios selecionados</p>
    </div>
    "#,
        );
    } else {
        for doc in visible {
            content.push_str(&document_card(doc));
        }
        content.push_str(&pagination(filter, current_page, total_pages));
    }

    base_template("Portal da Transparência", &content)
}

/// Stat cards: totals and the per-type distribution over the whole set.
fn stats_section(stats: &DocumentStats) -> String {
    let mut distribution = String::new();
    for doc_type in DocumentType::ALL {
        distribution.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>",
            doc_type.label(),
            stats.by_type.get(doc_type)
        ));
    }

    format!(
        r#"
    <section class="stats">
        <div class="stat-card">
            <h3>Total de Documentos</h3>
            <p class="stat-value">{}</p>
        </div>
        <div class="stat-card">
            <h3>Documentos Filtrados</h3>
            <p class="stat-value">{}</p>
        </div>
        <div class="stat-card">
            <h3>Distribuição por Tipo</h3>
            <dl>{}</dl>
        </div>
    </section>
    "#,
        stats.total, stats.filtered, distribution
    )
}

/// The filter form. Submitting it never carries a `page` parameter, so any
/// filter change resets the list to page 1.
fn filter_section(filter: &FilterState) -> String {
    let mut options = format!(
        r#"<option value="ALL"{}>Todos os Documentos</option>"#,
        selected(filter.doc_type == TypeFilter::All)
    );
    for doc_type in DocumentType::ALL {
        options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            doc_type.as_str(),
            selected(filter.doc_type == TypeFilter::Only(doc_type)),
            doc_type.label()
        ));
    }

    format!(
        r#"
    <form class="filters" method="get" action="/">
        <input type="search" name="q" value="{}"
               placeholder="Pesquisar por título, descrição ou número...">
        <div class="row">
            <label>Tipo de Documento
                <select name="tipo">{}</select>
            </label>
            <label>Data Inicial
                <input type="date" name="from" value="{}">
            </label>
            <label>Data Final
                <input type="date" name="to" value="{}">
            </label>
        </div>
        <div class="actions">
            <button type="submit" class="btn">Filtrar</button>
            <a class="btn" href="/">Limpar Pesquisa</a>
        </div>
    </form>
    "#,
        html_escape(&filter.search_term),
        options,
        date_value(filter.date_range.from),
        date_value(filter.date_range.to),
    )
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// One document card with its download link through the proxy.
fn document_card(doc: &Document) -> String {
    format!(
        r#"
    <article class="document-card">
        <h2>{} de {}</h2>
        <p class="doc-number">Número do documento: {}</p>
        <p>{}</p>
        <a class="btn" href="/api/document/download/{}">Baixar PDF</a>
    </article>
    "#,
        html_escape(&display_title(&doc.title)),
        format_date_long(doc.date),
        html_escape(&doc.number),
        html_escape(&doc.description),
        doc.download_slug(),
    )
}

/// Windowed pagination control with prev/next and ellipsis jumps.
fn pagination(filter: &FilterState, current_page: usize, total_pages: usize) -> String {
    let window = catalog::page_window(current_page, total_pages);
    let mut buttons = String::new();

    buttons.push_str(&nav_button(
        filter,
        current_page.saturating_sub(1),
        "« Anterior",
        window.has_prev,
        false,
    ));

    if let Some(target) = window.prev_jump {
        buttons.push_str(&nav_button(filter, target, "...", true, false));
    }
    for page in window.start..=window.end {
        buttons.push_str(&nav_button(
            filter,
            page,
            &page.to_string(),
            true,
            page == current_page,
        ));
    }
    if let Some(target) = window.next_jump {
        buttons.push_str(&nav_button(filter, target, "...", true, false));
    }

    buttons.push_str(&nav_button(
        filter,
        current_page + 1,
        "Próxima »",
        window.has_next,
        false,
    ));

    format!(r#"<nav class="pagination">{}</nav>"#, buttons)
}

fn nav_button(
    filter: &FilterState,
    target: usize,
    label: &str,
    enabled: bool,
    current: bool,
) -> String {
    if !enabled {
        format!(r#"<span class="btn disabled">{label}</span>"#)
    } else if current {
        format!(r#"<span class="btn current">{label}</span>"#)
    } else {
        format!(r#"<a class="btn" href="{}">{label}</a>"#, page_href(filter, target))
    }
}

/// Link to `page`, preserving the active filter in the query string.
/// Default-valued dimensions are omitted to keep the URLs short.
pub fn page_href(filter: &FilterState, page: usize) -> String {
    let mut params: Vec<String> = Vec::new();
    if !filter.search_term.is_empty() {
        params.push(format!("q={}", urlencoding::encode(&filter.search_term)));
    }
    if let TypeFilter::Only(doc_type) = filter.doc_type {
        params.push(format!("tipo={}", doc_type.as_str()));
    }
    if let Some(from) = filter.date_range.from {
        params.push(format!("from={}", from.format("%Y-%m-%d")));
    }
    if let Some(to) = filter.date_range.to {
        params.push(format!("to={}", to.format("%Y-%m-%d")));
    }
    if page > 1 {
        params.push(format!("page={page}"));
    }
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Write a date out in Portuguese: "01 de maio de 2024".
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        MONTHS_PT[date.month0() as usize],
        date.year()
    )
}

/// Title-case a document title, keeping the "nº" ordinal lowercase.
pub fn display_title(title: &str) -> String {
    let title_cased = title
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    title_cased.replace("Nº", "nº")
}

/// Escape text for embedding in HTML.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
