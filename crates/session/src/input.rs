use std::path::Path;
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use anytext_common::api::SourceFile;
use anytext_common::config::ConvertConfig;

/// Read one file from disk. The MIME type is guessed from the name the
/// way a browser would declare it; unknown types stay empty and dispatch
/// falls back to extension rules.
pub fn source_from_path(path: &Path) -> Result<SourceFile> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();
    let declared = mime_guess::from_path(path).first_raw().unwrap_or("");
    Ok(SourceFile::new(name, declared, mtime_of(path).unwrap_or(0), bytes))
}

/// Walk a folder tree, skipping excluded globs, preserving each file's
/// path relative to `root` so the bundle can reconstruct the layout.
pub fn collect_tree(root: &Path, cfg: &ConvertConfig) -> Result<Vec<SourceFile>> {
    let excludes = build_globset(&cfg.exclude)?;
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let rel = rel.to_string_lossy().replace('\\', "/");
        if excludes.is_match(&rel) {
            continue;
        }
        files.push(source_from_path(entry.path())?.with_rel_path(rel));
    }
    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("invalid exclude '{pattern}'"))?);
    }
    Ok(builder.build()?)
}

fn mtime_of(path: &Path) -> Option<i64> {
    std::fs::metadata(path)
        .ok()?
        .modified()
        .ok()?
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs() as i64)
}
