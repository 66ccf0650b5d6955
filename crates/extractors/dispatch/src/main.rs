use std::path::Path;
use std::process;
use std::time::UNIX_EPOCH;

use anytext_common::api::SourceFile;
use anytext_common::config::ConvertConfig;

fn main() {
    anytext_common::logging::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: anytext-extract-dispatch <file-path>");
        eprintln!();
        eprintln!("Converts one file to plain text and prints the result as JSON.");
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    let file = match read_source(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    match anytext_extract_dispatch::classify_and_extract(&file, &ConvertConfig::default()) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing result: {e}");
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn read_source(path: &Path) -> anyhow::Result<SourceFile> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();
    let modified = std::fs::metadata(path)?
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    // No declared MIME from the shell — dispatch falls back to extensions.
    Ok(SourceFile::new(name, "", modified, bytes))
}
