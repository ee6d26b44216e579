//! # msb-reader
//!
//! A reader for MSB visual-novel script files and their MPK container
//! archives. Decodes font-table-indexed dialogue text mixed with
//! single-byte control opcodes into annotated plain text.
//!
//! **Note:** Compressed MPK entries are extracted as-is; decompression is
//! not implemented.
pub mod mpk;
pub mod msb;

// Re-export the main types for convenience
pub use mpk::{MpkArchive, MpkEntry, MpkError};
pub use msb::{
    DecodeContext, DecodedString, FontTable, MsbEntry, MsbError, MsbHeader, MsbReader,
    PlayerName, WordWidth,
};
