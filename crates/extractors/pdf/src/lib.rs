use anyhow::{anyhow, Result};

use anytext_common::api::SourceFile;

pub fn accepts(file: &SourceFile) -> bool {
    file.declared_type == "application/pdf" || file.extension() == "pdf"
}

/// Extract text page by page: each page prefixed `Page <n>:` (1-indexed),
/// pages separated by a blank line, trailing whitespace trimmed from the
/// final result.
pub fn extract(bytes: &[u8], name: &str) -> Result<String> {
    Ok(join_pages(extract_pages(bytes, name)?))
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(i, page)| format!("Page {}:\n{}", i + 1, page))
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim_end()
        .to_string()
}

/// pdf-extract can panic on malformed input; contain it so a bad file
/// surfaces as a per-file error instead of killing the whole batch.
fn extract_pages(bytes: &[u8], name: &str) -> Result<Vec<String>> {
    let owned = bytes.to_vec();
    let outcome =
        std::panic::catch_unwind(move || pdf_extract::extract_text_from_mem_by_pages(&owned));
    match outcome {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(anyhow!("pdf decode failed: {e}")),
        Err(_) => Err(anyhow!("pdf decoder panicked on '{name}'")),
    }
}
