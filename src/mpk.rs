//! MPK container archive reading
//!
//! The companion archive format holding raw files (including MSB scripts).
//! A fixed-size header table describes each stored file by offset and
//! length; there is no decoding logic beyond bounds-checked slicing.
//!
//! Layout:
//! - 4 bytes: magic `MPK\0`
//! - 2 bytes: version minor (little-endian u16)
//! - 2 bytes: version major (little-endian u16)
//! - 8 bytes: file count (little-endian u64)
//! - From offset 64: one 256-byte record per file
//!   (compressed flag u32, id u32, offset u64, stored size u64,
//!   actual size u64, 224-byte NUL-terminated UTF-8 filename)

use std::fs;
use std::io;
use std::path::{Component, Path};

use byteorder::{ByteOrder, LittleEndian};
use log::{info, warn};
use thiserror::Error;

pub const MPK_MAGIC: [u8; 4] = *b"MPK\0";

const FIRST_ENTRY_OFFSET: usize = 64;
const ENTRY_RECORD_LEN: usize = 256;
const FILENAME_LEN: usize = 224;

/// Errors for MPK archive parsing and extraction.
#[derive(Debug, Error)]
pub enum MpkError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] io::Error),

    /// The file does not start with the `MPK\0` signature.
    #[error("Bad magic: expected \"MPK\\0\", got {found:02X?}")]
    BadMagic { found: [u8; 4] },

    /// The buffer ends before a required structure is complete.
    #[error("Truncated {context}: need {needed} bytes, only {available} available")]
    Truncated {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// The archive is structurally invalid in some other way.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, MpkError>;

/// One stored file described by the archive's entry table.
#[derive(Debug, Clone)]
pub struct MpkEntry {
    pub id: u32,
    pub filename: String,
    pub is_compressed: bool,
    pub offset: u64,
    pub size: u64,
    /// Decompressed size for compressed entries; equal to `size` otherwise.
    pub actual_size: u64,
}

/// An MPK archive loaded fully into memory.
#[derive(Debug)]
pub struct MpkArchive {
    data: Vec<u8>,
    pub version_major: u16,
    pub version_minor: u16,
    pub entries: Vec<MpkEntry>,
}

impl MpkArchive {
    /// Read an MPK archive from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening MPK archive: {}", path.display());
        let data = fs::read(path)?;
        Self::parse(data)
    }

    /// Parse an archive already loaded into memory.
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        if data.len() < 16 {
            return Err(MpkError::Truncated {
                context: "header",
                needed: 16,
                available: data.len(),
            });
        }
        if data[0..4] != MPK_MAGIC {
            let mut found = [0u8; 4];
            found.copy_from_slice(&data[0..4]);
            return Err(MpkError::BadMagic { found });
        }

        let version_minor = LittleEndian::read_u16(&data[4..6]);
        let version_major = LittleEndian::read_u16(&data[6..8]);
        let file_count = LittleEndian::read_u64(&data[8..16]);

        // The declared count is untrusted; bound the whole record table
        // against the buffer before it sizes anything.
        let table_end = file_count
            .saturating_mul(ENTRY_RECORD_LEN as u64)
            .saturating_add(FIRST_ENTRY_OFFSET as u64);
        if table_end > data.len() as u64 {
            return Err(MpkError::Truncated {
                context: "entry table",
                needed: table_end.min(usize::MAX as u64) as usize,
                available: data.len(),
            });
        }

        let mut entries = Vec::with_capacity(file_count as usize);
        for i in 0..file_count as usize {
            let start = FIRST_ENTRY_OFFSET + i * ENTRY_RECORD_LEN;
            let rec = &data[start..start + ENTRY_RECORD_LEN];

            let is_compressed = LittleEndian::read_u32(&rec[0..4]) == 1;
            let id = LittleEndian::read_u32(&rec[4..8]);
            let offset = LittleEndian::read_u64(&rec[8..16]);
            let size = LittleEndian::read_u64(&rec[16..24]);
            let actual_size = LittleEndian::read_u64(&rec[24..32]);

            let name_bytes = &rec[32..32 + FILENAME_LEN];
            let name_end = name_bytes.iter().position(|&b| b == 0).unwrap_or(FILENAME_LEN);
            let filename = String::from_utf8_lossy(&name_bytes[..name_end])
                .trim()
                .to_string();

            entries.push(MpkEntry {
                id,
                filename,
                is_compressed,
                offset,
                size,
                actual_size,
            });
        }

        info!(
            "MPK archive parsed: version {}.{}, {} files",
            version_major,
            version_minor,
            entries.len()
        );

        Ok(Self {
            data,
            version_major,
            version_minor,
            entries,
        })
    }

    /// Stored bytes of one entry, bounds-checked against the buffer.
    pub fn entry_data(&self, entry: &MpkEntry) -> Result<&[u8]> {
        let start = entry.offset as usize;
        let end = start
            .checked_add(entry.size as usize)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| {
                MpkError::InvalidFormat(format!(
                    "Entry {} data range (offset {}, size {}) out of bounds ({} bytes)",
                    entry.filename,
                    entry.offset,
                    entry.size,
                    self.data.len()
                ))
            })?;
        Ok(&self.data[start..end])
    }

    /// Extract every entry into `dir`, creating directories as needed.
    ///
    /// Compressed entries are written as-is with a warning; decompression
    /// is not implemented.
    pub fn extract_to(&self, dir: &Path) -> Result<usize> {
        fs::create_dir_all(dir)?;
        for entry in &self.entries {
            // Stored filenames must stay inside the output directory: no
            // absolute paths, no `..` components.
            if Path::new(&entry.filename)
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
            {
                return Err(MpkError::InvalidFormat(format!(
                    "Entry filename {:?} escapes the output directory",
                    entry.filename
                )));
            }
            if entry.is_compressed {
                warn!(
                    "Entry {} is compressed; extracting stored bytes as-is",
                    entry.filename
                );
            }
            let data = self.entry_data(entry)?;
            let dest = dir.join(&entry.filename);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, data)?;
        }
        info!(
            "Extracted {} files to {}",
            self.entries.len(),
            dir.display()
        );
        Ok(self.entries.len())
    }
}
