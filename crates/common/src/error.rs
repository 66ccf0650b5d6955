use thiserror::Error;

/// Failure modes surfaced by the dispatcher.
///
/// Extractor internals use `anyhow` with context; the dispatch boundary
/// wraps whatever they report into one of these two kinds so callers can
/// tell "we had no strategy" apart from "the strategy's decoder broke".
#[derive(Debug, Error)]
pub enum ConvertError {
    /// No dispatch rule matched and the byte-level fallback could not
    /// produce readable output.
    #[error("unsupported format: {name}")]
    UnsupportedFormat { name: String },

    /// A delegated decoder (document, spreadsheet, PDF, OCR, archive
    /// reader) failed on the chosen strategy.
    #[error("extraction failed for {name}")]
    ExtractionFailed {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConvertError {
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    pub fn extraction_failed(name: impl Into<String>, err: anyhow::Error) -> Self {
        Self::ExtractionFailed { name: name.into(), source: err.into() }
    }

    /// Name of the file the error applies to.
    pub fn file_name(&self) -> &str {
        match self {
            Self::UnsupportedFormat { name } => name,
            Self::ExtractionFailed { name, .. } => name,
        }
    }
}
