use msb_reader::MpkArchive;
use std::env;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <archive.mpk> [--out <dir>]", args[0]);
        std::process::exit(1);
    }

    let archive_path = PathBuf::from(&args[1]);
    let out_dir = args
        .iter()
        .position(|arg| arg == "--out")
        .and_then(|idx| args.get(idx + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            // Default: directory named after the archive stem
            archive_path
                .file_stem()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("extracted"))
        });

    println!("Reading MPK archive: {}", archive_path.display());
    println!("{}", "=".repeat(60));

    match MpkArchive::open(&archive_path) {
        Ok(archive) => {
            println!(
                "MPK version: {}.{}",
                archive.version_major, archive.version_minor
            );
            println!("Found {} files:", archive.entries.len());
            for entry in &archive.entries {
                println!(
                    "  [{}] {} ({} bytes{})",
                    entry.id,
                    entry.filename,
                    entry.size,
                    if entry.is_compressed { ", compressed" } else { "" }
                );
            }

            println!("\nExtracting to {}/ ...", out_dir.display());
            match archive.extract_to(&out_dir) {
                Ok(count) => {
                    println!("\n{}", "=".repeat(60));
                    println!("SUCCESS! Extracted {} files.", count);
                }
                Err(e) => {
                    eprintln!("\nERROR: Extraction failed");
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read MPK archive");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
