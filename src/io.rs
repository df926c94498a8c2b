//! Writing rendered sheets to files and in-memory buffers.
//!
//! Files get HTML page boilerplate; buffers receive the bare render.

use std::{fs, io::Write, path::Path};

use tracing::debug;

use crate::{
    Book, Format, Result, Sheet,
    html::wrap_page,
    render::{RenderOptions, render_book, render_sheet},
};

fn write_file(path: &Path, format: Format, content: &str) -> Result<()> {
    let content = if format == Format::Html {
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        wrap_page(&title, content)
    } else {
        content.to_string()
    };
    debug!(path = %path.display(), %format, bytes = content.len(), "writing file");
    fs::write(path, content)?;
    Ok(())
}

/// Save a sheet to `path`.
///
/// The format comes from `format`, or from the file extension when `None`.
///
/// # Errors
/// Returns an error if no format can be determined, rendering fails, or the
/// file cannot be written.
pub fn save_sheet_as(
    sheet: &Sheet,
    path: &Path,
    format: Option<Format>,
    options: &RenderOptions,
) -> Result<()> {
    let format = format.map_or_else(|| Format::from_path(path), Ok)?;
    let content = render_sheet(sheet, format, options)?;
    write_file(path, format, &content)
}

/// Save every sheet of a book to `path`.
///
/// # Errors
/// Returns an error if no format can be determined, rendering fails, or the
/// file cannot be written.
pub fn save_book_as(
    book: &Book,
    path: &Path,
    format: Option<Format>,
    options: &RenderOptions,
) -> Result<()> {
    let format = format.map_or_else(|| Format::from_path(path), Ok)?;
    let content = render_book(book, format, options)?;
    write_file(path, format, &content)
}

/// Write a rendered sheet to `writer` without page boilerplate.
///
/// # Errors
/// Returns an error if rendering or writing fails.
pub fn write_sheet<W: Write>(
    sheet: &Sheet,
    format: Format,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<()> {
    writer.write_all(render_sheet(sheet, format, options)?.as_bytes())?;
    Ok(())
}

/// Write a rendered book to `writer` without page boilerplate.
///
/// # Errors
/// Returns an error if rendering or writing fails.
pub fn write_book<W: Write>(
    book: &Book,
    format: Format,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<()> {
    writer.write_all(render_book(book, format, options)?.as_bytes())?;
    Ok(())
}
