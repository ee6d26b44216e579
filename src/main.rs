use msb_reader::msb::{default_output_path, write_transcript_file};
use msb_reader::{DecodeContext, FontTable, MsbReader, PlayerName, WordWidth};
use std::env;
use std::path::PathBuf;

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1).cloned())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1].starts_with("--") {
        eprintln!(
            "Usage: {} <input.msb> [--font <path>] [--names <path>] [--out <path>] [--wide]",
            args[0]
        );
        eprintln!("  --font <path>   font table text file (default: font.txt)");
        eprintln!("  --names <path>  player name text file (default: player.txt)");
        eprintln!("  --out <path>    output transcript (default: input with .txt)");
        eprintln!("  --wide          decode 32-bit character codes instead of 16-bit");
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let font_path = flag_value(&args, "--font").unwrap_or_else(|| "font.txt".to_string());
    let names_path = flag_value(&args, "--names").unwrap_or_else(|| "player.txt".to_string());
    let out_path = flag_value(&args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(&input));
    let width = if args.iter().any(|arg| arg == "--wide") {
        WordWidth::Bits32
    } else {
        WordWidth::Bits16
    };

    println!("Reading MSB file: {}", input.display());
    println!("{}", "=".repeat(60));

    let font = match FontTable::load(&font_path) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("\nERROR: Failed to load font table {}", font_path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };
    println!("Font table loaded: {} characters", font.len());

    let player = PlayerName::load(&names_path);
    if player.full().is_empty() {
        println!("Player name: (not set)");
    } else {
        println!("Player name: {}", player.full());
    }

    match MsbReader::new(&input) {
        Ok(reader) => {
            let ctx = DecodeContext {
                font: &font,
                player: &player,
                width,
            };
            let decoded = reader.decode_all(&ctx);

            println!("\nScript Information:");
            println!("  Version: {}", reader.header.version);
            println!("  Entries: {}", reader.entries.len());
            println!("  Decoded: {} non-empty strings", decoded.len());

            if let Err(e) = write_transcript_file(&out_path, &decoded, &player) {
                eprintln!("\nERROR: Failed to write {}", out_path.display());
                eprintln!("  {}", e);
                std::process::exit(1);
            }

            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Transcript written to {}", out_path.display());
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read MSB file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
