//! HTML table writer and page boilerplate.
//!
//! Cell text is padded exactly like the plain formats before it is escaped,
//! so the markup lines up when read as source.

use crate::layout::{Align, Layout};

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn cell_attrs(align: Align) -> &'static str {
    match align {
        Align::Left => "",
        Align::Decimal => " style=\"text-align: right;\"",
    }
}

fn html_row(tag: &str, cells: &[String], aligns: &[Align]) -> String {
    let body: String = cells
        .iter()
        .zip(aligns)
        .map(|(cell, align)| format!("<{tag}{}>{}</{tag}>", cell_attrs(*align), escape_html(cell)))
        .collect();
    format!("<tr>{body}</tr>")
}

/// Lines of an HTML `<table>`, with a `<thead>` when headers are present.
#[must_use]
pub(crate) fn html_table(layout: &Layout) -> Vec<String> {
    if layout.is_empty() {
        return Vec::new();
    }
    let mut out = vec!["<table>".to_string()];
    if let Some(headers) = &layout.headers {
        out.push("<thead>".to_string());
        out.push(html_row("th", headers, &layout.aligns));
        out.push("</thead>".to_string());
    }
    out.push("<tbody>".to_string());
    out.extend(
        layout
            .rows
            .iter()
            .map(|row| html_row("td", row, &layout.aligns)),
    );
    out.push("</tbody>".to_string());
    out.push("</table>".to_string());
    out
}

/// Wrap rendered tables in a minimal HTML page.
///
/// Used when the destination is a named file; in-memory renders stay bare.
#[must_use]
pub fn wrap_page(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>\n{body}</body></html>\n",
        escape_html(title)
    )
}
