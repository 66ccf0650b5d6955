use anytext_common::api::{ExtractionResult, SourceFile};

/// Text-like files: declared `text/*` MIME, or one of the plain-text
/// extensions handled without transformation.
pub fn accepts_text(file: &SourceFile) -> bool {
    file.declared_type.starts_with("text/") || is_text_ext(&file.extension())
}

pub fn is_text_ext(ext: &str) -> bool {
    matches!(
        ext,
        "txt" | "md" | "markdown" | "csv" | "log" | "cfg" | "ini" | "svg"
    )
}

pub fn accepts_json(file: &SourceFile) -> bool {
    file.declared_type == "application/json" || file.extension() == "json"
}

/// Markup and script sources are passed through verbatim — readable as-is.
pub fn accepts_source(file: &SourceFile) -> bool {
    matches!(
        file.declared_type.as_str(),
        "application/xml" | "application/javascript" | "application/x-javascript"
    ) || is_source_ext(&file.extension())
}

pub fn is_source_ext(ext: &str) -> bool {
    matches!(
        ext,
        "xml" | "html" | "htm" | "js" | "css" | "ts" | "tsx" | "jsx"
    )
}

/// Raw bytes as text, no transformation.
pub fn extract_text(file: &SourceFile) -> ExtractionResult {
    ExtractionResult::new("text", file.text_lossy())
}

/// Parse and re-serialize JSON with 2-space indentation. Malformed input
/// falls back to the raw text — a bad .json never fails extraction.
pub fn extract_json(file: &SourceFile) -> ExtractionResult {
    let raw = file.text_lossy();
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => {
            let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.clone());
            ExtractionResult::new("json", pretty)
        }
        Err(_) => ExtractionResult::new("json", raw),
    }
}

pub fn extract_source(file: &SourceFile) -> ExtractionResult {
    ExtractionResult::new("source", file.text_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str, bytes: &[u8]) -> SourceFile {
        SourceFile::new(name, mime, 0, bytes.to_vec())
    }

    #[test]
    fn test_accepts_text_by_mime_or_ext() {
        assert!(accepts_text(&file("notes", "text/plain", b"")));
        assert!(accepts_text(&file("notes.md", "", b"")));
        assert!(accepts_text(&file("DATA.CSV", "", b"")));
        assert!(accepts_text(&file("icon.svg", "", b"")));
        assert!(!accepts_text(&file("photo.png", "image/png", b"")));
        assert!(!accepts_text(&file("data.json", "application/json", b"")));
    }

    #[test]
    fn test_accepts_source() {
        assert!(accepts_source(&file("index.html", "", b"")));
        assert!(accepts_source(&file("app.tsx", "", b"")));
        assert!(accepts_source(&file("main", "application/javascript", b"")));
        assert!(!accepts_source(&file("notes.txt", "", b"")));
    }

    #[test]
    fn test_extract_text_verbatim() {
        let r = extract_text(&file("a.txt", "text/plain", b"line one\nline two"));
        assert_eq!(r.kind, "text");
        assert_eq!(r.text, "line one\nline two");
    }

    #[test]
    fn test_json_pretty_printed_with_key_order_kept() {
        let r = extract_json(&file("cfg.json", "", br#"{"zeta":1,"alpha":{"n":[1,2]}}"#));
        assert_eq!(r.kind, "json");
        assert_eq!(
            r.text,
            "{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"n\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_malformed_json_falls_back_to_raw() {
        let r = extract_json(&file("bad.json", "application/json", b"{not json"));
        assert_eq!(r.kind, "json");
        assert_eq!(r.text, "{not json");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let r = extract_text(&file("a.txt", "text/plain", &[b'h', b'i', 0xff, b'!']));
        assert_eq!(r.text, "hi\u{fffd}!");
    }
}
