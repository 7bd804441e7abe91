//! Locates the innings statistics table among a page's tables.

use crate::types::{SelectedTable, TableGrid};

use regex::Regex;
use scraper::{Html, Selector};

/// Reduces every `<table>` in the document to text cells, recording which
/// tables carry an innings-style header. Rows keep their document order;
/// cell-less rows are kept as empty rows and count toward a table's size.
pub fn extract_tables(html: &str) -> Vec<TableGrid> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();
    let header_selector = Selector::parse("th").unwrap();

    let mut tables = Vec::new();

    for table in document.select(&table_selector) {
        let has_innings_header = table.select(&header_selector).any(|th| {
            let text = th.text().collect::<String>();
            text.contains("Inn") || text.contains("Score")
        });

        let rows = table
            .select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>().trim().to_string())
                    .collect::<Vec<_>>()
            })
            .collect();

        tables.push(TableGrid::new(rows, has_innings_header));
    }

    tables
}

/// Picks the table most likely to hold innings data, trying the keyword
/// strategy first and falling back to the largest table on the page.
pub fn select(tables: &[TableGrid]) -> Option<SelectedTable> {
    keyword_strategy(tables)
        .or_else(|| largest_table_strategy(tables))
        .map(reconcile)
}

/// Convenience wrapper for callers holding raw HTML.
pub fn select_innings_table(html: &str) -> Option<SelectedTable> {
    select(&extract_tables(html))
}

// Every table whose th cells mention "Inn" or "Score" contributes: its first
// row replaces the current headers, and each later row is kept only when its
// cell count matches that table's header count. Rows from all matching tables
// land in one accumulator while the last matching table's header wins.
fn keyword_strategy(tables: &[TableGrid]) -> Option<SelectedTable> {
    let whitespace = Regex::new(r"\s+").unwrap();

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for table in tables.iter().filter(|t| t.has_innings_header) {
        let Some(header_row) = table.rows.first() else {
            continue;
        };
        headers = header_row.clone();

        for row in table.rows.iter().skip(1).filter(|r| !r.is_empty()) {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| whitespace.replace_all(cell, " ").into_owned())
                .collect();

            if cells.len() == headers.len() {
                rows.push(cells);
            }
        }
    }

    if rows.is_empty() {
        None
    } else {
        Some(SelectedTable::new(headers, rows))
    }
}

// Among tables with more than one row, the one with the most cell-bearing
// rows wins (first max on ties). First row becomes the headers, the rest are
// taken verbatim with no cell-count filtering.
fn largest_table_strategy(tables: &[TableGrid]) -> Option<SelectedTable> {
    let mut best: Option<Vec<Vec<String>>> = None;

    for table in tables {
        if table.rows.len() <= 1 {
            continue;
        }
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .filter(|r| !r.is_empty())
            .cloned()
            .collect();
        if rows.is_empty() {
            continue;
        }
        if best.as_ref().is_none_or(|b| rows.len() > b.len()) {
            best = Some(rows);
        }
    }

    let mut rows = best?;
    let headers = rows.remove(0);
    if rows.is_empty() {
        return None;
    }

    Some(SelectedTable::new(headers, rows))
}

/// Makes the header row's length match the data rows' length, cleans header
/// text, and names the known-blank column. Idempotent; a table without rows
/// is returned unchanged.
pub fn reconcile(mut table: SelectedTable) -> SelectedTable {
    let Some(first_row) = table.rows.first() else {
        return table;
    };
    let data_len = first_row.len();

    if table.headers.len() < data_len {
        for i in table.headers.len()..data_len {
            table.headers.push(format!("Column_{}", i + 1));
        }
    } else if table.headers.len() > data_len {
        table.headers.truncate(data_len);
    }

    for header in &mut table.headers {
        *header = header
            .replace('\n', " ")
            .replace('\r', " ")
            .trim()
            .to_string();
    }

    // The innings view leaves the format column unlabelled.
    if table.headers.len() >= 12 && table.headers[11].is_empty() {
        table.headers[11] = "format".to_string();
    }

    table
}
