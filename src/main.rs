use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use sheetfmt::{
    Book, Content, Format, RenderOptions, Sheet, read_content, read_csv, save_book_as, save_sheet_as,
    write_book, write_sheet,
};

#[derive(Parser)]
#[command(version, about = "Render spreadsheet data as text tables, HTML or JSON")]
struct Cli {
    /// Output format: simple, rst, html or json [default: simple, or inferred from --output]
    #[arg(short, long)]
    format: Option<Format>,
    /// Write to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    opts: SheetOpts,
    /// CSV, JSON or HTML files to render (CSV on stdin when omitted)
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct SheetOpts {
    /// Omit the "name:" line above each table
    #[arg(long = "no-title")]
    no_title: bool,
    /// Use this row of every sheet as column names
    #[arg(long = "name-columns-by-row", value_name = "N")]
    name_columns_by_row: Option<usize>,
    /// Use this column of every sheet as row names
    #[arg(long = "name-rows-by-column", value_name = "N")]
    name_rows_by_column: Option<usize>,
}

/// Read the inputs; a lone single-sheet input stays a sheet.
fn load_inputs(files: &[PathBuf]) -> anyhow::Result<Content> {
    let read = |path: &PathBuf| {
        read_content(path).with_context(|| format!("failed to read {}", path.display()))
    };
    match files {
        [] => {
            let sheet = read_csv(io::stdin().lock(), "stdin").context("failed to read stdin")?;
            Ok(Content::Sheet(sheet))
        }
        [path] => read(path),
        _ => {
            let contents = files
                .par_iter()
                .map(read)
                .collect::<anyhow::Result<Vec<_>>>()?;

            let mut merged = Book::new();
            for content in contents {
                for sheet in content.into_book().into_sheets() {
                    merged.add_sheet(sheet)?;
                }
            }
            Ok(Content::Book(merged))
        }
    }
}

fn name_sheet(sheet: &mut Sheet, opts: SheetOpts) -> anyhow::Result<()> {
    if let Some(row) = opts.name_columns_by_row {
        sheet
            .name_columns_by_row(row)
            .with_context(|| format!("sheet `{}`", sheet.name()))?;
    }
    if let Some(col) = opts.name_rows_by_column {
        sheet
            .name_rows_by_column(col)
            .with_context(|| format!("sheet `{}`", sheet.name()))?;
    }
    Ok(())
}

fn apply_names(content: &mut Content, opts: SheetOpts) -> anyhow::Result<()> {
    match content {
        Content::Sheet(sheet) => name_sheet(sheet, opts),
        Content::Book(book) => book
            .sheets_mut()
            .try_for_each(|sheet| name_sheet(sheet, opts)),
    }
}

fn write_output(
    content: &Content,
    format: Option<Format>,
    output: Option<&Path>,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    if let Some(path) = output {
        let saved = match content {
            Content::Sheet(sheet) => save_sheet_as(sheet, path, format, options),
            Content::Book(book) => save_book_as(book, path, format, options),
        };
        return saved.with_context(|| format!("failed to write {}", path.display()));
    }
    let format = format.unwrap_or(Format::Simple);
    let mut stdout = io::stdout().lock();
    match content {
        Content::Sheet(sheet) => write_sheet(sheet, format, options, &mut stdout)?,
        Content::Book(book) => write_book(book, format, options, &mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}

/// Entry point for the command-line renderer.
///
/// Reads every input (in parallel when there are several) and merges their
/// sheets into one book in argument order. A single input that holds one
/// sheet is rendered as that sheet, so JSON output is a bare row array.
/// The naming options apply to every sheet before rendering to standard
/// output or to `--output`.
///
/// # Examples
///
/// ```sh
/// # Plain table on stdout
/// sheetfmt data.csv
///
/// # reStructuredText with the first row as column names
/// sheetfmt --format rst --name-columns-by-row 0 data.csv
///
/// # Standalone HTML page
/// sheetfmt -o report.html a.csv b.json
/// ```
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut content = load_inputs(&cli.files)?;
    apply_names(&mut content, cli.opts)?;
    let options = RenderOptions {
        write_title: !cli.opts.no_title,
    };
    write_output(&content, cli.format, cli.output.as_deref(), &options)
}
