//! JSON encoding of flattened sheets.

use serde_json::{Map, Number, Value};

use crate::{Cell, Error, Result, layout::Grid};

fn cell_value(cell: &Cell, sheet: &str, row: usize, column: usize) -> Result<Value> {
    match cell {
        Cell::Empty => Err(Error::EmptyCell {
            sheet: sheet.to_string(),
            row,
            column,
        }),
        Cell::Int(i) => Ok(Value::from(*i)),
        Cell::Float(f) => Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| Error::NonFiniteNumber {
                sheet: sheet.to_string(),
                row,
                column,
            }),
        Cell::Bool(b) => Ok(Value::Bool(*b)),
        Cell::Text(s) => Ok(Value::String(s.clone())),
    }
}

/// Encode a grid as an array of row arrays, header row first.
pub(crate) fn grid_value(grid: &Grid, sheet: &str) -> Result<Value> {
    let offset = usize::from(grid.headers.is_some());
    let mut rows = Vec::with_capacity(grid.rows.len() + offset);
    if let Some(headers) = &grid.headers {
        rows.push(Value::Array(
            headers.iter().cloned().map(Value::String).collect(),
        ));
    }
    for (r, row) in grid.rows.iter().enumerate() {
        let cells = row
            .iter()
            .enumerate()
            .map(|(c, cell)| cell_value(cell, sheet, r + offset, c))
            .collect::<Result<Vec<_>>>()?;
        rows.push(Value::Array(cells));
    }
    Ok(Value::Array(rows))
}

/// Encode named grids as an object keyed by sheet name, in order.
pub(crate) fn book_value<'a>(grids: impl IntoIterator<Item = (&'a str, Grid)>) -> Result<Value> {
    let mut map = Map::new();
    for (name, grid) in grids {
        map.insert(name.to_string(), grid_value(&grid, name)?);
    }
    Ok(Value::Object(map))
}
