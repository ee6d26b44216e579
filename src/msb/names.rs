//! Player name resource loading

use std::fs;
use std::path::Path;

use log::warn;

/// The player name pair substituted for the 0x20/0x21 opcodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerName {
    pub surname: String,
    pub given_name: String,
}

impl PlayerName {
    /// Parse a player name from raw file content.
    ///
    /// Only the first line is used, split on the first space into surname
    /// and given name. A line without a space yields an empty given name.
    pub fn parse(content: &str) -> Self {
        let line = content.lines().next().unwrap_or("").trim();
        match line.split_once(' ') {
            Some((surname, given)) => PlayerName {
                surname: surname.to_string(),
                given_name: given.trim().to_string(),
            },
            None => PlayerName {
                surname: line.to_string(),
                given_name: String::new(),
            },
        }
    }

    /// Load the player name from a UTF-8 text file.
    ///
    /// A missing file is not fatal: it degrades to two empty strings so
    /// name opcodes render as nothing.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                warn!(
                    "Player name file {} unavailable ({}); using empty names",
                    path.display(),
                    e
                );
                PlayerName::default()
            }
        }
    }

    /// Full display form, `surname given_name`, trimmed when either half is
    /// empty.
    pub fn full(&self) -> String {
        match (self.surname.is_empty(), self.given_name.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.surname.clone(),
            (true, false) => self.given_name.clone(),
            (false, false) => format!("{} {}", self.surname, self.given_name),
        }
    }
}
