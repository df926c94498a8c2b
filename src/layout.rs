//! Column typing, alignment and width calculation for the text formats.
//!
//! A [`Grid`] is the flattened form of a sheet. [`Layout::new`] turns it into
//! padded strings that the simple, rst and html writers only need to join.

use unicode_width::UnicodeWidthStr;

use crate::{Cell, cell::CellKind};

static MISSING: Cell = Cell::Empty;

/// Flattened sheet: optional header labels followed by data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Grid {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub(crate) fn column_count(&self) -> usize {
        let data = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let headers = self.headers.as_ref().map_or(0, Vec::len);
        data.max(headers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    /// Decimal points line up, then the column is right-justified.
    Decimal,
}

/// Padded cells ready to be joined into table lines.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Layout {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub widths: Vec<usize>,
    pub aligns: Vec<Align>,
}

impl Layout {
    pub(crate) fn new(grid: &Grid) -> Self {
        let cols = grid.column_count();
        let mut columns: Vec<Vec<String>> = Vec::with_capacity(cols);
        let mut widths = Vec::with_capacity(cols);
        let mut aligns = Vec::with_capacity(cols);

        for idx in 0..cols {
            let cells: Vec<&Cell> = grid
                .rows
                .iter()
                .map(|row| row.get(idx).unwrap_or(&MISSING))
                .collect();
            let align = column_align(&cells);
            let header = grid
                .headers
                .as_ref()
                .map(|h| h.get(idx).map_or("", String::as_str));
            let mut strings = match align {
                Align::Left => cells.iter().map(ToString::to_string).collect(),
                Align::Decimal => align_decimals(&cells),
            };
            let min_width = header.map_or(0, |h| h.width() + 2);
            let width = strings
                .iter()
                .map(|s| s.width())
                .max()
                .unwrap_or(0)
                .max(min_width);
            for s in &mut strings {
                *s = pad(s, width, align);
            }
            columns.push(strings);
            widths.push(width);
            aligns.push(align);
        }

        let headers: Option<Vec<String>> = grid.headers.as_ref().map(|h| {
            (0..cols)
                .map(|idx| pad(h.get(idx).map_or("", String::as_str), widths[idx], aligns[idx]))
                .collect()
        });
        let rows = (0..grid.rows.len())
            .map(|r| columns.iter().map(|col| col[r].clone()).collect::<Vec<_>>())
            .collect();

        Self {
            headers,
            rows,
            widths,
            aligns,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Numeric columns get decimal alignment; everything else is left-aligned.
fn column_align(cells: &[&Cell]) -> Align {
    let mut seen_number = false;
    for cell in cells {
        match cell.kind() {
            CellKind::Blank => {}
            CellKind::Int | CellKind::Float => seen_number = true,
            CellKind::Text => return Align::Left,
        }
    }
    if seen_number { Align::Decimal } else { Align::Left }
}

/// Digits after the decimal point, or `None` for cells without one.
fn after_point(cell: &Cell, text: &str) -> Option<usize> {
    match cell {
        Cell::Float(_) => text.rfind('.').map(|pos| text.len() - pos - 1),
        _ => None,
    }
}

/// Right-pad numeric strings so their decimal points share a column.
fn align_decimals(cells: &[&Cell]) -> Vec<String> {
    let strings: Vec<String> = cells.iter().map(ToString::to_string).collect();
    let decimals: Vec<Option<usize>> = cells
        .iter()
        .zip(&strings)
        .map(|(cell, s)| after_point(cell, s))
        .collect();
    let Some(max) = decimals.iter().flatten().copied().max() else {
        return strings;
    };
    strings
        .into_iter()
        .zip(decimals)
        .map(|(s, dec)| {
            // cells without a point also skip the point's own column
            let fill = dec.map_or(max + 1, |d| max - d);
            format!("{s}{}", " ".repeat(fill))
        })
        .collect()
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Decimal => format!("{fill}{text}"),
    }
}
