use scraper::{ElementRef, Html, Selector};

use crate::error::{AcquireError, Result};
use crate::normalize::collapse_whitespace;

/// One row of the genre table: title as spelled by the word-count site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRow {
    pub title: String,
    pub genre: String,
}

/// Index of the genre table among the page's tables.
const GENRE_TABLE_INDEX: usize = 1;

/// Parse the genre table from the word-count page.
///
/// The table's first row is a header and is skipped. Columns are
/// word count, title, genre; the word count is discarded.
pub fn parse_genre_table(html: &str, url: &str) -> Result<Vec<GenreRow>> {
    let document = Html::parse_document(html);

    let table_sel = Selector::parse("table").expect("valid selector");
    let tr_sel = Selector::parse("tr").expect("valid selector");
    let cell_sel = Selector::parse("td, th").expect("valid selector");

    let table = document
        .select(&table_sel)
        .nth(GENRE_TABLE_INDEX)
        .ok_or_else(|| AcquireError::Html {
            url: url.to_string(),
            reason: format!("expected at least {} tables", GENRE_TABLE_INDEX + 1),
        })?;

    let mut rows = Vec::new();
    for (index, tr) in table.select(&tr_sel).enumerate().skip(1) {
        let cells: Vec<ElementRef> = tr.select(&cell_sel).collect();
        if cells.len() < 3 {
            tracing::debug!(row = index, cols = cells.len(), "Skipping genre row with < 3 columns");
            continue;
        }

        let title = cell_text(cells[1]);
        if title.is_empty() {
            tracing::debug!(row = index, "Skipping genre row without a title");
            continue;
        }
        rows.push(GenreRow {
            title,
            genre: cell_text(cells[2]),
        });
    }

    tracing::info!(rows = rows.len(), "Parsed genre table");
    Ok(rows)
}

fn cell_text(cell: ElementRef) -> String {
    collapse_whitespace(&cell.text().collect::<String>())
}
