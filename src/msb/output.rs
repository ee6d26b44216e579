//! Transcript formatting and writing

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use super::error::Result;
use super::models::DecodedString;
use super::names::PlayerName;

/// Default output path: the input path with its extension replaced by
/// `.txt`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut path = input.to_path_buf();
    path.set_extension("txt");
    path
}

/// Write the transcript to any writer.
///
/// Format: a short comment header (tool identity, resolved player name)
/// followed by one `[<index>] <text>` line per decoded string.
pub fn write_transcript<W: Write>(
    writer: &mut W,
    decoded: &[DecodedString],
    player: &PlayerName,
) -> io::Result<()> {
    writeln!(
        writer,
        "# Extracted by {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(writer, "# Player name: {}", player.full())?;
    writeln!(writer)?;
    for record in decoded {
        writeln!(writer, "[{}] {}", record.logical_index, record.text)?;
    }
    Ok(())
}

/// Write the transcript to a file, overwriting any existing file.
pub fn write_transcript_file(
    path: &Path,
    decoded: &[DecodedString],
    player: &PlayerName,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_transcript(&mut writer, decoded, player)?;
    writer.flush()?;
    info!("Transcript written: {} ({} lines)", path.display(), decoded.len());
    Ok(())
}
