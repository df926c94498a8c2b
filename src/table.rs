//! Plain and reStructuredText table writers.
//!
//! Both styles separate columns by two spaces and draw rules as runs of a
//! single character per column. They only differ in the rule character and
//! in which rules survive when the table has a header.

use crate::layout::Layout;

const COLUMN_SEP: &str = "  ";

/// Rule placement for a text table style.
struct TextStyle {
    rule: char,
    /// Outer rules are dropped when a header line is present.
    hide_outer_with_header: bool,
}

const SIMPLE: TextStyle = TextStyle {
    rule: '-',
    hide_outer_with_header: true,
};

const RST: TextStyle = TextStyle {
    rule: '=',
    hide_outer_with_header: false,
};

fn rule_line(widths: &[usize], rule: char) -> String {
    widths
        .iter()
        .map(|w| rule.to_string().repeat(*w))
        .collect::<Vec<_>>()
        .join(COLUMN_SEP)
}

fn format_table(layout: &Layout, style: &TextStyle) -> Vec<String> {
    if layout.is_empty() {
        return Vec::new();
    }
    let rule = rule_line(&layout.widths, style.rule);
    let outer = layout.headers.is_none() || !style.hide_outer_with_header;

    let mut out = Vec::with_capacity(layout.rows.len() + 4);
    if outer {
        out.push(rule.clone());
    }
    if let Some(headers) = &layout.headers {
        out.push(headers.join(COLUMN_SEP));
        out.push(rule.clone());
    }
    out.extend(layout.rows.iter().map(|row| row.join(COLUMN_SEP)));
    if outer {
        out.push(rule);
    }
    out
}

/// Lines of a plain table: dashed rules, two-space column gaps.
#[must_use]
pub(crate) fn simple_table(layout: &Layout) -> Vec<String> {
    format_table(layout, &SIMPLE)
}

/// Lines of a reStructuredText simple table.
#[must_use]
pub(crate) fn rst_table(layout: &Layout) -> Vec<String> {
    format_table(layout, &RST)
}
