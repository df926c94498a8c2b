//! JSON input: an array of row arrays, or an object of such arrays.

use std::io::Read;

use serde_json::Value;
use tracing::debug;

use super::Content;
use crate::{Book, Cell, Error, Result, Sheet};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn cell_from_value(value: Value) -> Result<Cell> {
    match value {
        Value::Null => Ok(Cell::Empty),
        Value::Bool(b) => Ok(Cell::Bool(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Cell::Int(i)),
            None => n
                .as_f64()
                .map(Cell::Float)
                .ok_or_else(|| Error::InvalidInput(format!("unsupported number {n}"))),
        },
        Value::String(s) => Ok(Cell::Text(s)),
        other => Err(Error::InvalidInput(format!(
            "expected a cell value, found {}",
            kind(&other)
        ))),
    }
}

fn sheet_from_value(name: &str, value: Value) -> Result<Sheet> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(Error::InvalidInput(format!(
                "sheet `{name}`: expected an array of rows, found {}",
                kind(&other)
            )));
        }
    };
    let rows = rows
        .into_iter()
        .map(|row| match row {
            Value::Array(cells) => cells.into_iter().map(cell_from_value).collect::<Result<Vec<_>>>(),
            other => Err(Error::InvalidInput(format!(
                "sheet `{name}`: expected a row array, found {}",
                kind(&other)
            ))),
        })
        .collect::<Result<Vec<Vec<Cell>>>>()?;
    Ok(Sheet::new(name, rows))
}

/// Parse JSON rows, keeping a top-level array as a lone sheet.
pub(super) fn parse_json<R: Read>(reader: R, name: &str) -> Result<Content> {
    let value: Value = serde_json::from_reader(reader)?;
    let content = match value {
        Value::Object(map) => {
            let mut book = Book::new();
            for (key, rows) in map {
                let sheet = sheet_from_value(&key, rows)?;
                book.add_sheet(sheet)?;
            }
            debug!(sheets = book.len(), "read json book");
            Content::Book(book)
        }
        other => {
            debug!(sheet = name, "read json sheet");
            Content::Sheet(sheet_from_value(name, other)?)
        }
    };
    Ok(content)
}

/// Read JSON rows into a book.
///
/// A top-level array becomes one sheet called `name`. A top-level object
/// becomes one sheet per key, in document order.
///
/// # Errors
/// Returns an error if the input is not valid JSON or does not have the
/// shape described above.
pub fn read_json<R: Read>(reader: R, name: &str) -> Result<Book> {
    parse_json(reader, name).map(Content::into_book)
}
