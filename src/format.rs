//! Output format flags.

use std::{fmt, path::Path, str::FromStr};

use crate::{Error, Result};

/// Rendering strategy selected by a format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Plain table with dashed rules.
    Simple,
    /// reStructuredText simple table.
    Rst,
    Html,
    Json,
}

impl Format {
    /// Canonical flag name, also the default file extension.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Rst => "rst",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Pick a format from the extension of `path`.
    ///
    /// # Errors
    /// Returns [`Error::MissingExtension`] when the path has no extension and
    /// [`Error::UnknownFormat`] when the extension is not recognised.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::MissingExtension(path.to_path_buf()))?;
        ext.parse()
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" | "plain" | "txt" => Ok(Self::Simple),
            "rst" | "restructuredtext" | "restructured-text" => Ok(Self::Rst),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
