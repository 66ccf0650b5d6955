use anytext_common::api::{ExtractionResult, SourceFile};
use anytext_common::config::ConvertConfig;
use anytext_common::error::ConvertError;
use tracing::warn;

/// Pick the first matching extraction strategy for the file and run it.
///
/// Order: text-like → JSON → markup/script source → document →
/// spreadsheet → PDF → image → archive → byte-level fallback. Each
/// category consults both the declared MIME type and the name extension.
/// Collaborator failures surface as `ExtractionFailed`; the fallback
/// returns `UnsupportedFormat` only when it cannot produce anything
/// readable.
pub fn classify_and_extract(
    file: &SourceFile,
    cfg: &ConvertConfig,
) -> Result<ExtractionResult, ConvertError> {
    if file.size > cfg.max_file_size_kb * 1024 {
        return Err(fail(
            file,
            anyhow::anyhow!("file exceeds the {} KB size limit", cfg.max_file_size_kb),
        ));
    }

    if anytext_extract_text::accepts_text(file) {
        return Ok(anytext_extract_text::extract_text(file));
    }

    if anytext_extract_text::accepts_json(file) {
        return Ok(anytext_extract_text::extract_json(file));
    }

    if anytext_extract_text::accepts_source(file) {
        return Ok(anytext_extract_text::extract_source(file));
    }

    if anytext_extract_office::accepts_document(file) {
        let text = anytext_extract_office::extract_docx(&file.bytes).map_err(|e| fail(file, e))?;
        return Ok(ExtractionResult::new("document", text));
    }

    if anytext_extract_office::accepts_spreadsheet(file) {
        let text =
            anytext_extract_office::extract_workbook(&file.bytes).map_err(|e| fail(file, e))?;
        return Ok(ExtractionResult::new("spreadsheet", text));
    }

    if anytext_extract_pdf::accepts(file) {
        let text =
            anytext_extract_pdf::extract(&file.bytes, &file.name).map_err(|e| fail(file, e))?;
        return Ok(ExtractionResult::new("pdf", text));
    }

    if anytext_extract_image::accepts(file) {
        let text = anytext_extract_image::extract(file, cfg.ocr).map_err(|e| fail(file, e))?;
        return Ok(ExtractionResult::new("image", text));
    }

    if anytext_extract_archive::accepts(file) {
        let text = anytext_extract_archive::list(file).map_err(|e| fail(file, e))?;
        return Ok(ExtractionResult::new("archive", text));
    }

    // ── Byte-level fallback ──────────────────────────────────────────────────
    if anytext_extract_binary::is_binary(&file.bytes) {
        return match anytext_extract_binary::describe(file) {
            Some(text) => Ok(ExtractionResult::new("binary", text)),
            None => {
                warn!("no readable content in '{}'", file.name);
                Err(ConvertError::unsupported(file.name.as_str()))
            }
        };
    }
    Ok(ExtractionResult::new("text", file.text_lossy()))
}

fn fail(file: &SourceFile, err: anyhow::Error) -> ConvertError {
    warn!("extraction failed for '{}': {err:#}", file.name);
    ConvertError::extraction_failed(file.name.as_str(), err)
}
