//! HTML input: every `<table>` in a document becomes a sheet.
//!
//! Only `<table>`, `<tr>`, `<th>` and `<td>` are recognised. Attributes such
//! as `colspan` are ignored. When the first row of a table consists solely
//! of `<th>` cells it names the sheet's columns.

use std::io::Read;

use html5ever::driver::ParseOpts;
use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{debug, warn};

use super::Content;
use crate::{Book, Cell, Error, Result, Sheet};

/// Extracts the text content of a DOM node, collapsing consecutive
/// whitespace to single spaces.
fn node_text(handle: &Handle) -> String {
    let mut out = String::new();
    let mut last_space = false;
    collect_text(handle, &mut out, &mut last_space);
    out
}

/// Recursively appends text nodes from `handle` to `out`, tracking whether the
/// previous output was whitespace.
fn collect_text(handle: &Handle, out: &mut String, last_space: &mut bool) {
    match &handle.data {
        NodeData::Text { contents } => {
            for ch in contents.borrow().chars() {
                if ch.is_whitespace() {
                    *last_space = true;
                } else {
                    if *last_space && !out.is_empty() {
                        out.push(' ');
                    }
                    out.push(ch);
                    *last_space = false;
                }
            }
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.as_ref();
            if tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style") {
                return;
            }
            for child in handle.children.borrow().iter() {
                collect_text(child, out, last_space);
            }
        }
        _ => {}
    }
}

fn is_element(handle: &Handle, tag: &str) -> bool {
    matches!(&handle.data, NodeData::Element { name, .. } if name.local.as_ref() == tag)
}

/// Walks the DOM tree collecting elements named `tag` under `handle`.
///
/// Matching elements are not searched further, so rows of a nested table
/// stay with the nested table.
fn collect_elements(handle: &Handle, tag: &str, found: &mut Vec<Handle>) {
    if is_element(handle, tag) {
        found.push(handle.clone());
        return;
    }
    for child in handle.children.borrow().iter() {
        collect_elements(child, tag, found);
    }
}

/// Collects the `<tr>` nodes of `table`, skipping any nested tables.
fn table_rows(table: &Handle) -> Vec<Handle> {
    let mut rows = Vec::new();
    for child in table.children.borrow().iter() {
        if !is_element(child, "table") {
            collect_elements(child, "tr", &mut rows);
        }
    }
    rows
}

/// Converts a `<table>` DOM node into a sheet.
fn table_node_to_sheet(table: &Handle, name: String) -> Sheet {
    let mut rows = Vec::new();
    let mut first_header = false;
    for (i, row) in table_rows(table).iter().enumerate() {
        let mut cells = Vec::new();
        let mut all_header = true;
        for child in row.children.borrow().iter() {
            if let NodeData::Element { name, .. } = &child.data {
                let tag = name.local.as_ref();
                if tag == "td" || tag == "th" {
                    all_header &= tag == "th";
                    cells.push(Cell::infer(&node_text(child)));
                }
            }
        }
        if i == 0 {
            first_header = all_header && !cells.is_empty();
        }
        rows.push(cells);
    }

    let mut sheet = Sheet::new(name, rows);
    if first_header && sheet.name_columns_by_row(0).is_err() {
        warn!(sheet = sheet.name(), "header row could not be applied");
    }
    sheet
}

/// Parse every `<table>` in a document; a lone table stays a lone sheet.
pub(super) fn parse_html<R: Read>(mut reader: R, name: &str) -> Result<Content> {
    let mut html = String::new();
    reader.read_to_string(&mut html)?;
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let mut tables = Vec::new();
    collect_elements(&dom.document, "table", &mut tables);
    debug!(tables = tables.len(), "read html");
    match tables.as_slice() {
        [] => Err(Error::InvalidInput(format!("`{name}` contains no <table>"))),
        [table] => Ok(Content::Sheet(table_node_to_sheet(table, name.to_string()))),
        tables => {
            let sheets = tables
                .iter()
                .enumerate()
                .map(|(idx, table)| table_node_to_sheet(table, format!("{name} {}", idx + 1)));
            Ok(Content::Book(Book::from_sheets(sheets)?))
        }
    }
}

/// Parse every `<table>` in an HTML document into a book.
///
/// A single table is named `name`; several are named `"{name} 1"`,
/// `"{name} 2"` and so on, in document order.
///
/// # Errors
/// Returns an error if the input cannot be read or holds no tables.
pub fn read_html<R: Read>(reader: R, name: &str) -> Result<Book> {
    parse_html(reader, name).map(Content::into_book)
}
