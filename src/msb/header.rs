//! MSB header and entry table parsing

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};

use super::error::{MsbError, Result};
use super::models::{MsbEntry, MsbHeader};

/// File signature at offset 0.
pub const MSB_MAGIC: [u8; 4] = *b"MES\0";

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 16;

/// Size of one entry table record in bytes.
pub const ENTRY_LEN: usize = 8;

/// Parse the fixed MSB file header.
///
/// Fails with `BadMagic` if the signature does not match, or `Truncated` if
/// fewer than 16 bytes are available. Pure: no side effects beyond reading.
pub fn parse_header(data: &[u8]) -> Result<MsbHeader> {
    if data.len() < HEADER_LEN {
        return Err(MsbError::Truncated {
            context: "header",
            needed: HEADER_LEN,
            available: data.len(),
        });
    }

    if data[0..4] != MSB_MAGIC {
        let mut found = [0u8; 4];
        found.copy_from_slice(&data[0..4]);
        return Err(MsbError::BadMagic { found });
    }

    let version = LittleEndian::read_i32(&data[4..8]);
    let entry_count = LittleEndian::read_i32(&data[8..12]);
    let text_base_offset = LittleEndian::read_i32(&data[12..16]);

    if entry_count < 0 {
        return Err(MsbError::InvalidFormat(format!(
            "Negative entry count: {}",
            entry_count
        )));
    }

    info!(
        "MSB header: version={}, entries={}, text base={:#x}",
        version, entry_count, text_base_offset
    );

    Ok(MsbHeader {
        version,
        entry_count,
        text_base_offset,
    })
}

/// Parse the entry table that immediately follows the header.
///
/// Each record is 8 bytes: logical index (i32 LE) + relative text offset
/// (i32 LE). Fails with `Truncated` if any record extends past the end of
/// the buffer. File order is preserved.
pub fn parse_entries(data: &[u8], header: &MsbHeader) -> Result<Vec<MsbEntry>> {
    let count = header.entry_count as usize;
    let table_end = HEADER_LEN + count * ENTRY_LEN;
    if data.len() < table_end {
        return Err(MsbError::Truncated {
            context: "entry table",
            needed: table_end,
            available: data.len(),
        });
    }

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let rec = &data[HEADER_LEN + i * ENTRY_LEN..HEADER_LEN + (i + 1) * ENTRY_LEN];
        let logical_index = LittleEndian::read_i32(&rec[0..4]);
        let relative_offset = LittleEndian::read_i32(&rec[4..8]);
        entries.push(MsbEntry {
            logical_index,
            relative_offset,
        });
    }

    debug!("Entry table parsed: {} entries", entries.len());
    Ok(entries)
}
