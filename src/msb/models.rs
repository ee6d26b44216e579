//! Data structures representing MSB format components

/// Parsed MSB file header.
///
/// Fixed 16-byte layout:
/// - 4 bytes: magic `MES\0`
/// - 4 bytes: format version (little-endian i32)
/// - 4 bytes: entry count (little-endian i32)
/// - 4 bytes: absolute offset of the text blob (little-endian i32)
#[derive(Debug, Clone, Copy)]
pub struct MsbHeader {
    pub version: i32,
    pub entry_count: i32,
    pub text_base_offset: i32,
}

/// One dialogue unit in the entry table.
///
/// `relative_offset` is added to `MsbHeader::text_base_offset` to find the
/// absolute start of this entry's text. Offsets are stored in file order but
/// are not guaranteed monotonic; each entry decodes independently.
#[derive(Debug, Clone, Copy)]
pub struct MsbEntry {
    pub logical_index: i32,
    pub relative_offset: i32,
}

/// One decoded dialogue string, tagged with its entry index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedString {
    pub logical_index: i32,
    pub text: String,
}

/// How character codes are encoded in the text blob.
///
/// The two known format families never mix widths within one file, so this
/// is a per-file setting threaded into the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordWidth {
    /// Character codes are 2 raw bytes (big-endian).
    #[default]
    Bits16,
    /// Character codes are 4 raw bytes (big-endian).
    Bits32,
}

impl WordWidth {
    /// Number of raw bytes one character code occupies.
    pub fn char_len(self) -> usize {
        match self {
            WordWidth::Bits16 => 2,
            WordWidth::Bits32 => 4,
        }
    }

    /// Mask that clears the high bit marking a byte as a character lead.
    pub fn code_mask(self) -> u32 {
        match self {
            WordWidth::Bits16 => 0x7FFF,
            WordWidth::Bits32 => 0x7FFF_FFFF,
        }
    }
}
