//! Flattening sheets and dispatching to a format writer.

use tracing::{debug, warn};

use crate::{
    Book, Cell, Format, Result, Sheet,
    html::html_table,
    json,
    layout::{Grid, Layout},
    table::{rst_table, simple_table},
};

/// Options shared by every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a `"{sheet name}:"` line above each table. Ignored by JSON.
    pub write_title: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { write_title: true }
    }
}

/// Build the header row and data rows of `sheet`.
///
/// Column names become the header. Row names become a leading label
/// column, under an empty header when column names are present too.
pub(crate) fn flatten(sheet: &Sheet) -> Grid {
    let rownames = sheet.rownames();
    let headers: Option<Vec<String>> = sheet.colnames().map(|names| {
        let label = rownames.map(|_| String::new());
        label.into_iter().chain(names.iter().cloned()).collect()
    });
    let rows: Vec<Vec<Cell>> = sheet
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let label = rownames.map(|names| Cell::Text(names.get(idx).cloned().unwrap_or_default()));
            label.into_iter().chain(row.iter().cloned()).collect::<Vec<_>>()
        })
        .collect();
    Grid { headers, rows }
}

type TableWriter = fn(&Layout) -> Vec<String>;

/// Table writer for the layout-based formats; `None` for JSON.
fn table_writer(format: Format) -> Option<TableWriter> {
    match format {
        Format::Simple => Some(simple_table),
        Format::Rst => Some(rst_table),
        Format::Html => Some(html_table),
        Format::Json => None,
    }
}

fn push_sheet_text(out: &mut String, sheet: &Sheet, writer: TableWriter, options: RenderOptions) {
    if sheet.height() == 0 && sheet.colnames().is_none() {
        warn!(sheet = sheet.name(), "rendering an empty sheet");
    }
    if options.write_title {
        out.push_str(sheet.name());
        out.push_str(":\n");
    }
    for line in writer(&Layout::new(&flatten(sheet))) {
        out.push_str(&line);
        out.push('\n');
    }
}

/// Render a single sheet.
///
/// Text formats produce an optional title line followed by the table. JSON
/// produces an array of row arrays.
///
/// # Errors
/// JSON output fails on empty or non-finite cells.
pub fn render_sheet(sheet: &Sheet, format: Format, options: &RenderOptions) -> Result<String> {
    debug!(sheet = sheet.name(), %format, "rendering sheet");
    let Some(writer) = table_writer(format) else {
        let value = json::grid_value(&flatten(sheet), sheet.name())?;
        return Ok(serde_json::to_string(&value)? + "\n");
    };
    let mut out = String::new();
    push_sheet_text(&mut out, sheet, writer, *options);
    Ok(out)
}

/// Render every sheet of a book in order.
///
/// Text formats concatenate the per-sheet blocks. JSON produces an object
/// mapping sheet names to row arrays.
///
/// # Errors
/// JSON output fails on empty or non-finite cells.
pub fn render_book(book: &Book, format: Format, options: &RenderOptions) -> Result<String> {
    debug!(sheets = book.len(), %format, "rendering book");
    let Some(writer) = table_writer(format) else {
        let value = json::book_value(book.sheets().iter().map(|s| (s.name(), flatten(s))))?;
        return Ok(serde_json::to_string(&value)? + "\n");
    };
    let mut out = String::new();
    for sheet in book.sheets() {
        push_sheet_text(&mut out, sheet, writer, *options);
    }
    Ok(out)
}
