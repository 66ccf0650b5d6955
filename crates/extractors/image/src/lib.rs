use std::io::{Cursor, Write};
use std::process::Command;

use anyhow::{anyhow, Context, Result};

use anytext_common::api::SourceFile;
use anytext_common::fmt;

const OCR_HEADER: &str = "Extracted text (OCR):";

pub fn accepts(file: &SourceFile) -> bool {
    file.declared_type.starts_with("image/") || is_raster_ext(&file.extension())
}

pub fn is_raster_ext(ext: &str) -> bool {
    matches!(
        ext,
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "tiff" | "tif"
    )
}

/// Recognize text in the image and append the image's metadata block.
///
/// Empty or whitespace-only recognition falls back to metadata alone.
/// With `ocr_enabled` off the engine is skipped entirely and only
/// metadata is emitted.
pub fn extract(file: &SourceFile, ocr_enabled: bool) -> Result<String> {
    let metadata = metadata_block(file);
    if !ocr_enabled {
        return Ok(metadata);
    }
    let recognized = run_ocr(&file.bytes, &file.extension())?;
    if recognized.trim().is_empty() {
        return Ok(metadata);
    }
    Ok(format!("{OCR_HEADER}\n\n{}\n\n{metadata}", recognized.trim_end()))
}

/// Stage the bytes in a temp file and shell out to the tesseract binary.
fn run_ocr(bytes: &[u8], ext: &str) -> Result<String> {
    let suffix = if ext.is_empty() {
        ".png".to_string()
    } else {
        format!(".{ext}")
    };
    let mut staged = tempfile::Builder::new()
        .suffix(&suffix)
        .tempfile()
        .context("staging image for OCR")?;
    staged.write_all(bytes)?;
    staged.flush()?;

    let output = Command::new("tesseract")
        .arg(staged.path())
        .arg("stdout")
        .output()
        .context("running tesseract (is it installed?)")?;
    if !output.status.success() {
        return Err(anyhow!(
            "tesseract exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Name, declared type, human-readable size, last-modified timestamp, and
/// best-effort pixel dimensions (omitted when the header is undecodable).
pub fn metadata_block(file: &SourceFile) -> String {
    let declared = if file.declared_type.is_empty() {
        "unknown"
    } else {
        &file.declared_type
    };
    let mut lines = vec![
        format!("Image file: {}", file.name),
        format!("Type: {declared}"),
        format!("Size: {}", fmt::human_size(file.size)),
        format!("Last modified: {}", fmt::format_timestamp(file.modified)),
    ];
    if let Some((width, height)) = dimensions(&file.bytes) {
        lines.push(format!("Dimensions: {width}x{height} px"));
    }
    lines.join("\n")
}

/// Decode just enough of the header to learn the pixel dimensions.
pub fn dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // GIF89a, 2x1 logical screen, no color table, trailer.
    const TINY_GIF: &[u8] = &[
        b'G', b'I', b'F', b'8', b'9', b'a', 2, 0, 1, 0, 0x00, 0, 0, 0x3b,
    ];

    fn gif_file() -> SourceFile {
        SourceFile::new("pixel.gif", "image/gif", 1700000000, TINY_GIF.to_vec())
    }

    #[test]
    fn test_accepts() {
        assert!(accepts(&SourceFile::new("shot.PNG", "", 0, vec![])));
        assert!(accepts(&SourceFile::new("blob", "image/webp", 0, vec![])));
        assert!(!accepts(&SourceFile::new("notes.txt", "text/plain", 0, vec![])));
    }

    #[test]
    fn test_dimensions_from_gif_header() {
        assert_eq!(dimensions(TINY_GIF), Some((2, 1)));
    }

    #[test]
    fn test_dimensions_unreadable_is_none() {
        assert_eq!(dimensions(b"not an image"), None);
    }

    #[test]
    fn test_metadata_block_fields() {
        let block = metadata_block(&gif_file());
        assert!(block.contains("Image file: pixel.gif"));
        assert!(block.contains("Type: image/gif"));
        assert!(block.contains("Size: 14 Bytes"));
        assert!(block.contains("Last modified: 2023-11-14 22:13:20 UTC"));
        assert!(block.contains("Dimensions: 2x1 px"));
    }

    #[test]
    fn test_metadata_skips_unreadable_dimensions() {
        let file = SourceFile::new("odd.png", "", 0, b"junk".to_vec());
        let block = metadata_block(&file);
        assert!(block.contains("Type: unknown"));
        assert!(!block.contains("Dimensions:"));
    }

    #[test]
    fn test_ocr_disabled_emits_metadata_only() {
        let text = extract(&gif_file(), false).unwrap();
        assert!(text.starts_with("Image file: pixel.gif"));
        assert!(!text.contains(OCR_HEADER));
    }
}
