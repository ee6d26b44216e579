use msb_reader::{MpkArchive, MpkError};
use std::fs;

const FIRST_ENTRY_OFFSET: usize = 64;
const ENTRY_RECORD_LEN: usize = 256;

/// Build a complete MPK buffer from (filename, bytes, compressed) triples.
fn build_mpk(files: &[(&str, &[u8], bool)]) -> Vec<u8> {
    let data_start = FIRST_ENTRY_OFFSET + files.len() * ENTRY_RECORD_LEN;
    let mut data = vec![0u8; data_start];
    data[0..4].copy_from_slice(b"MPK\0");
    data[4..6].copy_from_slice(&0u16.to_le_bytes()); // minor
    data[6..8].copy_from_slice(&2u16.to_le_bytes()); // major
    data[8..16].copy_from_slice(&(files.len() as u64).to_le_bytes());

    let mut offset = data_start as u64;
    for (i, (name, bytes, compressed)) in files.iter().enumerate() {
        let rec = FIRST_ENTRY_OFFSET + i * ENTRY_RECORD_LEN;
        if *compressed {
            data[rec..rec + 4].copy_from_slice(&1u32.to_le_bytes());
        }
        data[rec + 4..rec + 8].copy_from_slice(&(i as u32).to_le_bytes());
        data[rec + 8..rec + 16].copy_from_slice(&offset.to_le_bytes());
        data[rec + 16..rec + 24].copy_from_slice(&(bytes.len() as u64).to_le_bytes());
        data[rec + 24..rec + 32].copy_from_slice(&(bytes.len() as u64).to_le_bytes());
        data[rec + 32..rec + 32 + name.len()].copy_from_slice(name.as_bytes());
        offset += bytes.len() as u64;
    }
    for (_, bytes, _) in files {
        data.extend_from_slice(bytes);
    }
    data
}

#[test]
fn parses_header_and_entry_table() {
    let archive = MpkArchive::parse(build_mpk(&[
        ("script00.msb", b"hello", false),
        ("voice/line01.bin", b"\x01\x02\x03", true),
    ]))
    .expect("valid mpk");

    assert_eq!(archive.version_major, 2);
    assert_eq!(archive.version_minor, 0);
    assert_eq!(archive.entries.len(), 2);

    assert_eq!(archive.entries[0].filename, "script00.msb");
    assert_eq!(archive.entries[0].id, 0);
    assert!(!archive.entries[0].is_compressed);
    assert_eq!(archive.entries[0].size, 5);

    assert_eq!(archive.entries[1].filename, "voice/line01.bin");
    assert!(archive.entries[1].is_compressed);
}

#[test]
fn entry_data_returns_stored_bytes() {
    let archive = MpkArchive::parse(build_mpk(&[
        ("a.bin", b"first", false),
        ("b.bin", b"second", false),
    ]))
    .expect("valid mpk");

    assert_eq!(archive.entry_data(&archive.entries[0]).unwrap(), b"first");
    assert_eq!(archive.entry_data(&archive.entries[1]).unwrap(), b"second");
}

#[test]
fn bad_magic_is_fatal() {
    let mut data = build_mpk(&[]);
    data[0..4].copy_from_slice(b"MPQ\0");
    assert!(matches!(
        MpkArchive::parse(data),
        Err(MpkError::BadMagic { .. })
    ));
}

#[test]
fn truncated_entry_table_is_fatal() {
    // Header claims one file but the record table is missing.
    let mut data = build_mpk(&[]);
    data[8..16].copy_from_slice(&1u64.to_le_bytes());
    assert!(matches!(
        MpkArchive::parse(data),
        Err(MpkError::Truncated { context: "entry table", .. })
    ));
}

#[test]
fn huge_declared_file_count_is_truncated_error() {
    // A count that could never fit the buffer must fail cleanly before it
    // sizes any allocation.
    let mut data = build_mpk(&[]);
    data[8..16].copy_from_slice(&u64::MAX.to_le_bytes());
    assert!(matches!(
        MpkArchive::parse(data),
        Err(MpkError::Truncated { context: "entry table", .. })
    ));

    let mut data = build_mpk(&[]);
    data[8..16].copy_from_slice(&(1u64 << 40).to_le_bytes());
    assert!(matches!(
        MpkArchive::parse(data),
        Err(MpkError::Truncated { context: "entry table", .. })
    ));
}

#[test]
fn escaping_filenames_are_rejected_on_extract() {
    let out_dir = std::env::temp_dir().join(format!("mpk_spec_escape_{}", std::process::id()));

    let relative = MpkArchive::parse(build_mpk(&[("../escape.bin", b"x", false)]))
        .expect("table parses");
    assert!(matches!(
        relative.extract_to(&out_dir),
        Err(MpkError::InvalidFormat(_))
    ));

    let absolute = MpkArchive::parse(build_mpk(&[("/tmp/escape.bin", b"x", false)]))
        .expect("table parses");
    assert!(matches!(
        absolute.extract_to(&out_dir),
        Err(MpkError::InvalidFormat(_))
    ));

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn out_of_range_entry_data_is_rejected() {
    let mut data = build_mpk(&[("a.bin", b"abc", false)]);
    // Corrupt the stored size so the data range runs past the buffer.
    let rec = FIRST_ENTRY_OFFSET;
    data[rec + 16..rec + 24].copy_from_slice(&10_000u64.to_le_bytes());
    let archive = MpkArchive::parse(data).expect("table still parses");
    assert!(matches!(
        archive.entry_data(&archive.entries[0]),
        Err(MpkError::InvalidFormat(_))
    ));
}

#[test]
fn extract_writes_all_entries_as_stored() {
    let archive = MpkArchive::parse(build_mpk(&[
        ("script00.msb", b"plain", false),
        ("nested/data.bin", b"zipped-bytes", true),
    ]))
    .expect("valid mpk");

    let out_dir = std::env::temp_dir().join(format!("mpk_spec_{}", std::process::id()));
    let count = archive.extract_to(&out_dir).expect("extract");
    assert_eq!(count, 2);

    let plain = fs::read(out_dir.join("script00.msb")).expect("plain file");
    assert_eq!(plain, b"plain");

    // Compressed entries come out as stored; decompression is out of scope.
    let stored = fs::read(out_dir.join("nested").join("data.bin")).expect("nested file");
    assert_eq!(stored, b"zipped-bytes");

    fs::remove_dir_all(&out_dir).expect("cleanup");
}
