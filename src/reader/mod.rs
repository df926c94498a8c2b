//! Loading sheets from CSV, JSON and HTML inputs.

mod delimited;
mod html;
mod json;

use std::{fs::File, io::BufReader, path::Path};

use tracing::debug;

pub use self::{delimited::read_csv, html::read_html, json::read_json};
use crate::{Book, Error, Result, Sheet};

/// What an input holds: a lone sheet, or a book of named sheets.
///
/// CSV files, JSON arrays and HTML documents with one table are sheets.
/// JSON objects and HTML documents with several tables are books.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Sheet(Sheet),
    Book(Book),
}

impl Content {
    #[must_use]
    pub fn into_book(self) -> Book {
        match self {
            Self::Sheet(sheet) => Book::from(sheet),
            Self::Book(book) => book,
        }
    }
}

/// Read `path`, choosing the reader by file extension.
///
/// Sheets are named after the file stem.
///
/// # Errors
/// Returns an error for unsupported extensions, unreadable files or
/// malformed content.
pub fn read_content(path: &Path) -> Result<Content> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| Error::MissingExtension(path.to_path_buf()))?;
    let stem = path
        .file_stem()
        .map_or_else(|| "sheet".to_string(), |s| s.to_string_lossy().into_owned());
    if !matches!(ext.as_str(), "csv" | "json" | "html" | "htm") {
        return Err(Error::UnknownFormat(ext));
    }

    debug!(path = %path.display(), "reading input");
    let reader = BufReader::new(File::open(path)?);
    match ext.as_str() {
        "csv" => Ok(Content::Sheet(read_csv(reader, &stem)?)),
        "json" => json::parse_json(reader, &stem),
        _ => html::parse_html(reader, &stem),
    }
}

/// Read a book from `path`; single-sheet inputs become one-sheet books.
///
/// # Errors
/// See [`read_content`].
pub fn read_book(path: &Path) -> Result<Book> {
    read_content(path).map(Content::into_book)
}
