//! Library for rendering spreadsheet data as text.
//!
//! A [`Sheet`] or [`Book`] is flattened into rows, optionally headed by its
//! column names and labelled by its row names, and handed to a writer picked
//! by [`Format`]: a plain table, a reStructuredText table, an HTML table, or
//! JSON.
//!
//! ```
//! use sheetfmt::{Format, RenderOptions, Sheet, cells, render_sheet};
//!
//! let sheet = Sheet::new("pyramid", cells![[1, 2, 3], [4, 588, 6], [7, 8, 999]]);
//! let text = render_sheet(&sheet, Format::Simple, &RenderOptions::default()).unwrap();
//! assert_eq!(
//!     text,
//!     "pyramid:\n-  ---  ---\n1    2    3\n4  588    6\n7    8  999\n-  ---  ---\n"
//! );
//! ```

mod macros;

mod cell;
mod error;
mod format;
mod html;
mod io;
mod json;
mod layout;
mod reader;
mod render;
mod sheet;
mod table;

pub use cell::Cell;
pub use error::{Error, Result};
pub use format::Format;
pub use html::wrap_page;
pub use io::{save_book_as, save_sheet_as, write_book, write_sheet};
pub use reader::{Content, read_book, read_content, read_csv, read_html, read_json};
pub use render::{RenderOptions, render_book, render_sheet};
pub use sheet::{Book, Sheet};
