use std::path::Path;

use serde::{Deserialize, Serialize};

/// One user-supplied input file. Immutable once constructed: extractors and
/// the analyzer only ever borrow it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name as supplied (no directory part).
    pub name: String,
    /// Declared MIME type; empty string when the supplier had none.
    pub declared_type: String,
    pub size: u64,
    /// Last-modified time, Unix seconds.
    pub modified: i64,
    /// Path relative to the folder the file was supplied under.
    /// None for individually supplied files — those land at the bundle root.
    pub rel_path: Option<String>,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        modified: i64,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            size: bytes.len() as u64,
            modified,
            rel_path: None,
            bytes,
        }
    }

    pub fn with_rel_path(mut self, rel_path: impl Into<String>) -> Self {
        self.rel_path = Some(rel_path.into());
        self
    }

    /// Lowercased name extension, or empty string.
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase()
    }

    /// Raw bytes decoded as text, invalid sequences replaced.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Output of exactly one extraction strategy. All-or-nothing per file —
/// there is no partial or streaming result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Strategy label: "text" | "json" | "source" | "document" |
    /// "spreadsheet" | "pdf" | "image" | "archive" | "binary".
    pub kind: String,
    pub text: String,
}

impl ExtractionResult {
    pub fn new(kind: &str, text: impl Into<String>) -> Self {
        Self { kind: kind.to_string(), text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    Unknown,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Unknown => "Unknown",
        })
    }
}

/// Derived purely from extracted text; deterministic and side-effect-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    /// Up to 8 keywords, most frequent first.
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub language: Language,
}
