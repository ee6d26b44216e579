//! Core MSB script reader module

pub mod error;
pub mod models;
pub mod opcodes;
mod decoder;
mod font;
mod header;
mod names;
mod output;

use std::fs;
use std::path::Path;

use log::{info, warn};

pub use decoder::DecodeContext;
pub use error::{MsbError, Result};
pub use font::FontTable;
pub use models::{DecodedString, MsbEntry, MsbHeader, WordWidth};
pub use names::PlayerName;
pub use output::{default_output_path, write_transcript, write_transcript_file};

/// The main reader for MSB script files.
///
/// Holds the raw file bytes plus the parsed header and entry table; text
/// decoding is a pure pass over slices of that buffer.
#[derive(Debug)]
pub struct MsbReader {
    data: Vec<u8>,
    pub header: MsbHeader,
    pub entries: Vec<MsbEntry>,
}

impl MsbReader {
    /// Read an MSB file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - The magic signature is wrong
    /// - The header or entry table is truncated
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening MSB file: {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Parse an MSB file already loaded into memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let msb_header = header::parse_header(&data)?;
        let entries = header::parse_entries(&data, &msb_header)?;
        info!("MSB file parsed: {} entries", entries.len());
        Ok(Self {
            data,
            header: msb_header,
            entries,
        })
    }

    /// Decode one entry.
    ///
    /// Returns `None` when the entry decodes to an empty string or starts
    /// outside the buffer; neither is fatal.
    pub fn decode_entry(&self, entry: &MsbEntry, ctx: &DecodeContext) -> Option<DecodedString> {
        let start = self.header.text_base_offset as i64 + entry.relative_offset as i64;
        if start < 0 || start as u64 > self.data.len() as u64 {
            warn!(
                "Entry {} text offset {} outside the buffer ({} bytes)",
                entry.logical_index,
                start,
                self.data.len()
            );
            return None;
        }

        let text = decoder::decode_text(&self.data, start as usize, ctx);
        if text.is_empty() {
            None
        } else {
            Some(DecodedString {
                logical_index: entry.logical_index,
                text,
            })
        }
    }

    /// Decode every entry in table order.
    ///
    /// Entries that decode to nothing produce no record, so the result may
    /// be shorter than the entry table.
    pub fn decode_all(&self, ctx: &DecodeContext) -> Vec<DecodedString> {
        self.entries
            .iter()
            .filter_map(|entry| self.decode_entry(entry, ctx))
            .collect()
    }
}
