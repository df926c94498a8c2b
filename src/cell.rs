//! Cell values held by a [`Sheet`](crate::Sheet).

use std::fmt;

/// A single spreadsheet value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Placeholder for a missing value, e.g. padding of an irregular row.
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Coarse classification used when typing a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellKind {
    Blank,
    Int,
    Float,
    Text,
}

impl Cell {
    /// Convert raw text into the most specific cell it represents.
    ///
    /// Blank text is [`Cell::Empty`]. Integers are tried before floats, and
    /// only finite floats are accepted. Anything else keeps the original
    /// text untouched.
    ///
    /// ```
    /// use sheetfmt::Cell;
    ///
    /// assert_eq!(Cell::infer(" 42 "), Cell::Int(42));
    /// assert_eq!(Cell::infer("1.5"), Cell::Float(1.5));
    /// assert_eq!(Cell::infer("nan"), Cell::Text("nan".into()));
    /// assert_eq!(Cell::infer("  "), Cell::Empty);
    /// ```
    #[must_use]
    pub fn infer(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Int(i);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::Float(f),
            _ => Self::Text(text.to_string()),
        }
    }

    pub(crate) fn kind(&self) -> CellKind {
        match self {
            Self::Empty => CellKind::Blank,
            Self::Text(s) if s.is_empty() => CellKind::Blank,
            Self::Int(_) => CellKind::Int,
            Self::Float(_) => CellKind::Float,
            Self::Bool(_) | Self::Text(_) => CellKind::Text,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
