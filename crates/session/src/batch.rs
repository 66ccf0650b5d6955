use tracing::{info, warn};

use anytext_common::api::{AnalysisResult, ExtractionResult, SourceFile};
use anytext_common::config::ConvertConfig;

/// One input's conversion outcome. A failed conversion keeps its error
/// message in place of a result; analysis attaches to the record later,
/// on demand.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub name: String,
    /// Folder-relative path of the source, when it came from a tree.
    pub rel_path: Option<String>,
    /// Original extension replaced with `.txt`.
    pub output_name: String,
    pub result: Option<ExtractionResult>,
    pub analysis: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl ConvertedFile {
    pub fn succeeded(&self) -> bool {
        self.result.is_some()
    }
}

/// Replace the name's extension with `.txt`; extensionless names get
/// `.txt` appended. Only the last extension is replaced.
pub fn output_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => format!("{stem}.txt"),
        _ => format!("{name}.txt"),
    }
}

/// Convert a batch strictly sequentially, one extraction at a time.
///
/// `progress` observes `(i + 0.5) / n` while file `i` is being extracted
/// and `(i + 1) / n` once it completes. A per-file failure is captured in
/// that file's record — it never aborts the rest of the batch.
pub fn convert_batch<F>(
    files: &[SourceFile],
    cfg: &ConvertConfig,
    mut progress: F,
) -> Vec<ConvertedFile>
where
    F: FnMut(f64),
{
    let total = files.len();
    let mut converted = Vec::with_capacity(total);
    for (i, file) in files.iter().enumerate() {
        progress((i as f64 + 0.5) / total as f64);
        let record = match anytext_extract_dispatch::classify_and_extract(file, cfg) {
            Ok(result) => {
                info!("converted '{}' via the {} strategy", file.name, result.kind);
                record_for(file, Some(result), None)
            }
            Err(e) => {
                warn!("{e:#}");
                record_for(file, None, Some(format!("Failed to convert {}", file.name)))
            }
        };
        converted.push(record);
        progress((i + 1) as f64 / total as f64);
    }
    converted
}

fn record_for(
    file: &SourceFile,
    result: Option<ExtractionResult>,
    error: Option<String>,
) -> ConvertedFile {
    ConvertedFile {
        name: file.name.clone(),
        rel_path: file.rel_path.clone(),
        output_name: output_name(&file.name),
        result,
        analysis: None,
        error,
    }
}

/// Analyze one converted file on demand, attaching the result to its
/// record. Files that failed extraction have no text to analyze and are
/// left untouched.
pub async fn analyze_file(record: &mut ConvertedFile, cfg: &ConvertConfig) {
    let Some(result) = &record.result else { return };
    record.analysis = Some(anytext_analyze::analyze(&result.text, cfg).await);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ConvertConfig {
        ConvertConfig { ocr: false, analysis_delay_ms: 0, ..ConvertConfig::default() }
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name("report.docx"), "report.txt");
        assert_eq!(output_name("notes.txt"), "notes.txt");
        assert_eq!(output_name("data.tar.gz"), "data.tar.txt");
        assert_eq!(output_name("README"), "README.txt");
        assert_eq!(output_name(".gitignore"), ".gitignore.txt");
    }

    #[test]
    fn test_batch_progress_fractions() {
        let files = vec![
            SourceFile::new("a.txt", "text/plain", 0, b"one".to_vec()),
            SourceFile::new("b.txt", "text/plain", 0, b"two".to_vec()),
        ];
        let mut seen = Vec::new();
        let converted = convert_batch(&files, &cfg(), |p| seen.push(p));
        assert_eq!(seen, [0.25, 0.5, 0.75, 1.0]);
        assert!(converted.iter().all(ConvertedFile::succeeded));
    }

    #[test]
    fn test_batch_failure_does_not_abort_remaining_files() {
        let files = vec![
            SourceFile::new("broken.docx", "", 0, b"not a docx".to_vec()),
            SourceFile::new("ok.txt", "text/plain", 0, b"fine".to_vec()),
        ];
        let converted = convert_batch(&files, &cfg(), |_| {});

        assert!(!converted[0].succeeded());
        assert_eq!(
            converted[0].error.as_deref(),
            Some("Failed to convert broken.docx")
        );
        assert!(converted[1].succeeded());
        assert_eq!(converted[1].result.as_ref().unwrap().text, "fine");
    }

    #[test]
    fn test_empty_batch() {
        let converted = convert_batch(&[], &cfg(), |_| panic!("no progress expected"));
        assert!(converted.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_attaches_to_record() {
        let files = vec![SourceFile::new(
            "review.txt",
            "text/plain",
            0,
            b"I love this great product. It works perfectly.".to_vec(),
        )];
        let mut converted = convert_batch(&files, &cfg(), |_| {});
        analyze_file(&mut converted[0], &cfg()).await;

        let analysis = converted[0].analysis.as_ref().expect("analysis attached");
        assert_eq!(analysis.sentiment.to_string(), "positive");
        assert!(converted[0].result.is_some());
    }

    #[tokio::test]
    async fn test_analyze_skips_failed_records() {
        let files = vec![SourceFile::new("broken.docx", "", 0, b"junk".to_vec())];
        let mut converted = convert_batch(&files, &cfg(), |_| {});
        analyze_file(&mut converted[0], &cfg()).await;
        assert!(converted[0].analysis.is_none());
    }
}
