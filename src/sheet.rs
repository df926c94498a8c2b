//! In-memory sheet and book model.
//!
//! Sheets are always rectangular: irregular input rows are padded with
//! [`Cell::Empty`] when the sheet is built.

use crate::{Cell, Error, Result};

/// A named grid of cells with optional column and row names.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
    colnames: Option<Vec<String>>,
    rownames: Option<Vec<String>>,
}

impl Sheet {
    /// Build a sheet, padding short rows up to the widest one.
    #[must_use]
    pub fn new(name: impl Into<String>, mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::Empty);
        }
        Self {
            name: name.into(),
            rows,
            colnames: None,
            rownames: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn colnames(&self) -> Option<&[String]> {
        self.colnames.as_deref()
    }

    #[must_use]
    pub fn rownames(&self) -> Option<&[String]> {
        self.rownames.as_deref()
    }

    /// Number of data rows, excluding any row used for column names.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of data columns, excluding any column used for row names.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows
            .first()
            .map_or_else(|| self.colnames.as_ref().map_or(0, Vec::len), Vec::len)
    }

    /// Take row `index` out of the data and use it as column names.
    ///
    /// # Errors
    /// Returns [`Error::RowOutOfRange`] when `index` is not a data row.
    pub fn name_columns_by_row(&mut self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(Error::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let row = self.rows.remove(index);
        if let Some(names) = self.rownames.as_mut() {
            names.remove(index);
        }
        self.colnames = Some(row.iter().map(ToString::to_string).collect());
        Ok(())
    }

    /// Take column `index` out of every row and use it as row names.
    ///
    /// # Errors
    /// Returns [`Error::ColumnOutOfRange`] when `index` is not a data column.
    pub fn name_rows_by_column(&mut self, index: usize) -> Result<()> {
        let width = self.width();
        if index >= width {
            return Err(Error::ColumnOutOfRange { index, len: width });
        }
        let names = self
            .rows
            .iter_mut()
            .map(|row| row.remove(index).to_string())
            .collect();
        if let Some(colnames) = self.colnames.as_mut() {
            colnames.remove(index);
        }
        self.rownames = Some(names);
        Ok(())
    }
}

/// An ordered collection of uniquely named sheets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Book {
    sheets: Vec<Sheet>,
}

impl Book {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from sheets, keeping their order.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateSheetName`] if two sheets share a name.
    pub fn from_sheets(sheets: impl IntoIterator<Item = Sheet>) -> Result<Self> {
        let mut book = Self::new();
        for sheet in sheets {
            book.add_sheet(sheet)?;
        }
        Ok(book)
    }

    /// Append a sheet.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateSheetName`] if the name is already taken.
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<()> {
        if self.sheet(sheet.name()).is_some() {
            return Err(Error::DuplicateSheetName(sheet.name().to_string()));
        }
        self.sheets.push(sheet);
        Ok(())
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    #[must_use]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheets_mut(&mut self) -> impl Iterator<Item = &mut Sheet> {
        self.sheets.iter_mut()
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(Sheet::name)
    }

    #[must_use]
    pub fn into_sheets(self) -> Vec<Sheet> {
        self.sheets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl From<Sheet> for Book {
    fn from(sheet: Sheet) -> Self {
        Self {
            sheets: vec![sheet],
        }
    }
}
