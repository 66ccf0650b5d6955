use std::io::{Cursor, Write};

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use anytext_common::api::AnalysisResult;

use crate::batch::ConvertedFile;

/// Bundle every successful conversion into an in-memory ZIP.
///
/// Individually supplied files sit at the archive root; folder-supplied
/// files keep their relative directories, extension replaced. A file
/// that has been analyzed gets a `<stem>_analysis.txt` companion
/// alongside it. Reads only already-computed results — no re-extraction.
pub fn write_bundle(files: &[ConvertedFile]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        let Some(result) = &file.result else { continue };
        let entry = entry_path(file);
        writer
            .start_file(entry.as_str(), options)
            .with_context(|| format!("adding '{entry}' to bundle"))?;
        writer.write_all(result.text.as_bytes())?;

        if let Some(analysis) = &file.analysis {
            let companion = companion_path(&entry);
            writer
                .start_file(companion.as_str(), options)
                .with_context(|| format!("adding '{companion}' to bundle"))?;
            writer.write_all(render_analysis(analysis).as_bytes())?;
        }
    }
    Ok(writer.finish().context("finalising bundle")?.into_inner())
}

/// Where the converted file lands inside the bundle: under the source's
/// relative directory when it came from a tree, at the root otherwise.
fn entry_path(file: &ConvertedFile) -> String {
    match file.rel_path.as_deref().and_then(|rel| rel.rsplit_once('/')) {
        Some((dir, _name)) => format!("{dir}/{}", file.output_name),
        None => file.output_name.clone(),
    }
}

fn companion_path(entry: &str) -> String {
    match entry.strip_suffix(".txt") {
        Some(stem) => format!("{stem}_analysis.txt"),
        None => format!("{entry}_analysis.txt"),
    }
}

/// Companion file body: summary, comma-joined keywords, sentiment,
/// language.
fn render_analysis(analysis: &AnalysisResult) -> String {
    format!(
        "Summary:\n{}\n\nKeywords: {}\nSentiment: {}\nLanguage: {}\n",
        analysis.summary,
        analysis.keywords.join(", "),
        analysis.sentiment,
        analysis.language,
    )
}
