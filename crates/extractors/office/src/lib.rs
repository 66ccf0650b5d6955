use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::events::Event;

use anytext_common::api::SourceFile;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const XLS_MIME: &str = "application/vnd.ms-excel";

/// Accept word-processing documents.
pub fn accepts_document(file: &SourceFile) -> bool {
    file.declared_type == DOCX_MIME || file.extension() == "docx"
}

/// Accept spreadsheet workbooks.
pub fn accepts_spreadsheet(file: &SourceFile) -> bool {
    matches!(file.declared_type.as_str(), XLSX_MIME | XLS_MIME)
        || matches!(file.extension().as_str(), "xlsx" | "xls")
}

// ── DOCX ─────────────────────────────────────────────────────────────────────

/// Extract the document body as paragraphs separated by blank lines.
pub fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut container =
        zip::ZipArchive::new(Cursor::new(bytes)).context("opening docx container")?;
    let mut xml = String::new();
    container
        .by_name("word/document.xml")
        .context("docx has no word/document.xml")?
        .read_to_string(&mut xml)
        .context("reading word/document.xml")?;
    Ok(parse_docx_paragraphs(&xml).join("\n\n"))
}

/// Collect non-empty paragraphs from word/document.xml: text runs inside
/// `w:t`, grouped per `w:p`.
fn parse_docx_paragraphs(xml: &str) -> Vec<String> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:p" => current.clear(),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    let text = current.trim().to_string();
                    if !text.is_empty() {
                        paragraphs.push(text);
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_run {
                    if let Ok(text) = e.unescape() {
                        current.push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }
    paragraphs
}

// ── XLSX / XLS ───────────────────────────────────────────────────────────────

/// Render every sheet, in workbook order, as a `Sheet:` header, a
/// separator line, and the sheet's CSV rows. Sheets are separated by a
/// blank line.
pub fn extract_workbook(bytes: &[u8]) -> Result<String> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))
        .context("opening workbook")?;
    let mut sections = Vec::new();
    for sheet_name in workbook.sheet_names().to_vec() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("reading sheet '{sheet_name}'"))?;
        sections.push(sheet_section(&sheet_name, &range_to_csv(&range)));
    }
    Ok(sections.join("\n\n"))
}

fn sheet_section(name: &str, csv: &str) -> String {
    format!("Sheet: {}\n{}\n{}", name, "=".repeat(50), csv)
}

fn range_to_csv(range: &calamine::Range<calamine::Data>) -> String {
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(cell_to_csv)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_to_csv(cell: &calamine::Data) -> String {
    let s = match cell {
        calamine::Data::Empty => String::new(),
        other => other.to_string(),
    };
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anytext_common::api::SourceFile;

    fn file(name: &str, mime: &str) -> SourceFile {
        SourceFile::new(name, mime, 0, vec![])
    }

    #[test]
    fn test_accepts() {
        assert!(accepts_document(&file("report.docx", "")));
        assert!(accepts_document(&file("REPORT.DOCX", "")));
        assert!(accepts_document(&file("blob", DOCX_MIME)));
        assert!(!accepts_document(&file("report.odt", "")));

        assert!(accepts_spreadsheet(&file("data.xlsx", "")));
        assert!(accepts_spreadsheet(&file("data.xls", "")));
        assert!(accepts_spreadsheet(&file("blob", XLS_MIME)));
        assert!(!accepts_spreadsheet(&file("data.csv", "")));
    }

    #[test]
    fn test_parse_docx_paragraphs() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>
    <w:p><w:r><w:t>Second </w:t></w:r><w:r><w:t>paragraph</w:t></w:r></w:p>
    <w:p><w:r><w:t>   </w:t></w:r></w:p>
    <w:p><w:r><w:t>Third paragraph</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let paras = parse_docx_paragraphs(xml);
        assert_eq!(paras, ["First paragraph", "Second paragraph", "Third paragraph"]);
    }

    #[test]
    fn test_docx_entities_unescaped() {
        let xml = r#"<w:document xmlns:w="x">
  <w:body><w:p><w:r><w:t>Fish &amp; chips</w:t></w:r></w:p></w:body>
</w:document>"#;
        assert_eq!(parse_docx_paragraphs(xml), ["Fish & chips"]);
    }

    #[test]
    fn test_not_a_docx_is_an_error() {
        assert!(extract_docx(b"this is not a zip container").is_err());
    }

    #[test]
    fn test_sheet_section_shape() {
        let section = sheet_section("Sheet1", "a,b\n1,2");
        let mut lines = section.lines();
        assert_eq!(lines.next(), Some("Sheet: Sheet1"));
        assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
        assert_eq!(lines.next(), Some("a,b"));
        assert_eq!(lines.next(), Some("1,2"));
    }

    #[test]
    fn test_cell_csv_escaping() {
        use calamine::Data;
        assert_eq!(cell_to_csv(&Data::String("plain".into())), "plain");
        assert_eq!(cell_to_csv(&Data::String("a,b".into())), "\"a,b\"");
        assert_eq!(cell_to_csv(&Data::String("say \"hi\"".into())), "\"say \"\"hi\"\"\"");
        assert_eq!(cell_to_csv(&Data::Empty), "");
        assert_eq!(cell_to_csv(&Data::Int(42)), "42");
    }

    #[test]
    fn test_not_a_workbook_is_an_error() {
        assert!(extract_workbook(b"definitely not a workbook").is_err());
    }
}
