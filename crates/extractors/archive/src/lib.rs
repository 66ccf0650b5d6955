use std::io::Cursor;

use anyhow::{Context, Result};

use anytext_common::api::SourceFile;
use anytext_common::fmt;

pub fn accepts(file: &SourceFile) -> bool {
    matches!(
        file.declared_type.as_str(),
        "application/zip" | "application/java-archive"
    ) || matches!(file.extension().as_str(), "zip" | "jar")
}

/// List the archive's entries without extracting them: a header naming
/// the archive, a separator, then one line per entry in central-directory
/// order. Directories are tagged as such; files get a human-readable size.
pub fn list(file: &SourceFile) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(file.bytes.as_slice()))
        .with_context(|| format!("opening archive '{}'", file.name))?;

    let mut lines = Vec::with_capacity(archive.len() + 2);
    lines.push(format!("Archive: {}", file.name));
    lines.push("=".repeat(50));
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .with_context(|| format!("reading entry {i}"))?;
        if entry.is_dir() {
            lines.push(format!("{} (directory)", entry.name()));
        } else {
            lines.push(format!("{} ({})", entry.name(), fmt::human_size(entry.size())));
        }
    }
    Ok(lines.join("\n"))
}
