//! Font (character) table loading
//!
//! The engine renders character codes through an external font table: a
//! UTF-8 text file whose characters are indexed positionally after layout
//! whitespace is stripped. Position = character code after high-bit
//! clearing.

use std::fs;
use std::path::Path;

use log::info;

use super::error::Result;

/// Positional lookup from integer code to a renderable character.
///
/// Immutable for the lifetime of a decode session.
#[derive(Debug, Clone)]
pub struct FontTable {
    chars: Vec<char>,
}

impl FontTable {
    /// Build a font table from raw file content.
    ///
    /// Strips carriage returns, newlines, regular and ideographic spaces,
    /// and one leading BOM; the remaining characters are indexed in order.
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        let chars: Vec<char> = content
            .chars()
            .filter(|&c| !matches!(c, '\r' | '\n' | ' ' | '\u{3000}'))
            .collect();
        FontTable { chars }
    }

    /// Load a font table from a UTF-8 text file.
    ///
    /// A missing or unreadable file is fatal: nothing can be decoded
    /// without the table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content);
        info!(
            "Font table loaded from {}: {} characters",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Character at `code`, or `None` if the code is out of range.
    pub fn lookup(&self, code: u32) -> Option<char> {
        self.chars.get(code as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
