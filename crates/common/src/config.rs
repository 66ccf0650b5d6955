use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Files above this size are rejected before dispatch.
    #[serde(default = "default_max_file_size_kb")]
    pub max_file_size_kb: u64,

    /// Run OCR on images. When off, image extraction emits metadata only.
    #[serde(default = "default_true")]
    pub ocr: bool,

    /// Glob patterns skipped when collecting a folder tree.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Artificial latency added to each analysis call, in milliseconds.
    /// Zero disables the delay (tests rely on this).
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_file_size_kb: default_max_file_size_kb(),
            ocr: default_true(),
            exclude: default_excludes(),
            analysis_delay_ms: default_analysis_delay_ms(),
        }
    }
}

impl ConvertConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

fn default_excludes() -> Vec<String> {
    vec![
        "**/.git/**".into(),
        "**/node_modules/**".into(),
        "**/target/**".into(),
        "**/__pycache__/**".into(),
        "**/.cache/**".into(),
    ]
}

fn default_max_file_size_kb() -> u64 {
    10240
}

fn default_analysis_delay_ms() -> u64 {
    1500
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ConvertConfig::default();
        assert_eq!(cfg.max_file_size_kb, 10240);
        assert!(cfg.ocr);
        assert!(cfg.exclude.iter().any(|g| g.contains(".git")));
        assert_eq!(cfg.analysis_delay_ms, 1500);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg = ConvertConfig::from_toml("ocr = false\nanalysis_delay_ms = 0\n").unwrap();
        assert!(!cfg.ocr);
        assert_eq!(cfg.analysis_delay_ms, 0);
        assert_eq!(cfg.max_file_size_kb, 10240);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(ConvertConfig::from_toml("ocr = maybe").is_err());
    }
}
