use anytext_common::api::SourceFile;
use anytext_common::fmt;

/// How far into the content the binary/text probe looks.
const SNIFF_LEN: usize = 1000;
const HEX_DUMP_LEN: usize = 16;
const MIN_RUN_LEN: usize = 4;
const MAX_RUNS_COLLECTED: usize = 100;
const MAX_RUNS_SHOWN: usize = 20;

/// A zero byte within the first 1000 bytes marks the content as binary;
/// anything else is treated as text by the fallback.
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(SNIFF_LEN).any(|&b| b == 0)
}

/// Best-effort description of a binary blob: identity block, hex dump of
/// the first 16 bytes, magic-number format guess, printable-ASCII runs.
///
/// Returns None when neither a known signature nor any printable run was
/// found — the caller reports the file as unsupported instead.
pub fn describe(file: &SourceFile) -> Option<String> {
    let signature = detect_signature(&file.bytes);
    let runs = printable_runs(&file.bytes);
    if signature.is_none() && runs.is_empty() {
        return None;
    }

    let declared = if file.declared_type.is_empty() {
        "unknown"
    } else {
        &file.declared_type
    };
    let mut out = vec![
        format!("Binary file: {}", file.name),
        format!("Type: {declared}"),
        format!("Size: {}", fmt::human_size(file.size)),
        format!("Last modified: {}", fmt::format_timestamp(file.modified)),
        String::new(),
        format!("Hex (first {HEX_DUMP_LEN} bytes): {}", hex_dump(&file.bytes)),
        format!("Detected format: {}", signature.unwrap_or("unknown")),
    ];

    if !runs.is_empty() {
        out.push(String::new());
        if runs.len() > MAX_RUNS_SHOWN {
            out.push(format!("Strings (first {MAX_RUNS_SHOWN} of {}):", runs.len()));
        } else {
            out.push("Strings:".to_string());
        }
        for run in runs.iter().take(MAX_RUNS_SHOWN) {
            out.push(run.clone());
        }
    }
    Some(out.join("\n"))
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(HEX_DUMP_LEN)
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Magic-number match via infer, rendered as a display name for the
/// well-known formats and the raw MIME type for anything else.
fn detect_signature(bytes: &[u8]) -> Option<&'static str> {
    let kind = infer::get(bytes)?;
    Some(match kind.extension() {
        "png" => "PNG image",
        "jpg" => "JPEG image",
        "gif" => "GIF image",
        "pdf" => "PDF document",
        "zip" => "ZIP archive",
        "rar" => "RAR archive",
        "elf" => "ELF executable",
        "exe" => "Windows executable",
        _ => kind.mime_type(),
    })
}

/// Runs of printable ASCII (0x20..=0x7E) of length >= 4, in byte order.
/// Collection stops after the first 100 runs.
fn printable_runs(bytes: &[u8]) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for &b in bytes {
        if (0x20..=0x7e).contains(&b) {
            current.push(b as char);
            continue;
        }
        if current.len() >= MIN_RUN_LEN {
            runs.push(std::mem::take(&mut current));
            if runs.len() >= MAX_RUNS_COLLECTED {
                return runs;
            }
        } else {
            current.clear();
        }
    }
    if current.len() >= MIN_RUN_LEN && runs.len() < MAX_RUNS_COLLECTED {
        runs.push(current);
    }
    runs
}
