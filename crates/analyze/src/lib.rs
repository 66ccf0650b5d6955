//! Heuristic text analysis: summary, keyword ranking, sentiment and
//! language labels. Fixed rules over word lists — deterministic, never
//! failing, with an artificial delay standing in for a remote service.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use anytext_common::api::{AnalysisResult, Language, Sentiment};
use anytext_common::config::ConvertConfig;

const MAX_KEYWORDS: usize = 8;
const MAX_SUMMARY_LEN: usize = 200;
const MIN_SEGMENT_LEN: usize = 10;
const SUMMARY_SEGMENTS: usize = 3;
const LANGUAGE_SAMPLE_TOKENS: usize = 100;

const NO_SUMMARY: &str = "No meaningful summary could be generated from this content.";

fn word_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W+").unwrap())
}

fn sentence_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

/// Run every heuristic over the text. The configured delay emulates the
/// latency of an analysis service call; the result depends on nothing
/// but the text.
pub async fn analyze(text: &str, cfg: &ConvertConfig) -> AnalysisResult {
    if cfg.analysis_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(cfg.analysis_delay_ms)).await;
    }
    AnalysisResult {
        summary: summarize(text),
        keywords: keywords(text),
        sentiment: sentiment(text),
        language: detect_language(text),
    }
}

// ── Summary ──────────────────────────────────────────────────────────────────

/// First three substantial sentence segments, joined and capped at 200
/// characters (ellipsis appended when truncated). A fixed placeholder
/// covers text with no qualifying segment.
pub fn summarize(text: &str) -> String {
    let segments: Vec<&str> = sentence_splitter()
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SEGMENT_LEN)
        .take(SUMMARY_SEGMENTS)
        .collect();
    if segments.is_empty() {
        return NO_SUMMARY.to_string();
    }
    let joined = segments.join(". ");
    if joined.len() <= MAX_SUMMARY_LEN {
        return joined;
    }
    let mut cut = MAX_SUMMARY_LEN;
    while !joined.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &joined[..cut])
}

// ── Keywords ─────────────────────────────────────────────────────────────────

/// Stop-word-filtered frequency ranking: lower-cased word tokens longer
/// than three characters, top 8 by count. The sort is stable, so equal
/// counts keep first-encounter order.
pub fn keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for token in word_splitter().split(&lower) {
        if token.chars().count() <= 3 || STOP_WORDS.contains(&token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}

// ── Sentiment ────────────────────────────────────────────────────────────────

/// Word-list vote: more positive hits than negative → Positive, the
/// reverse → Negative, anything else → Neutral.
pub fn sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let mut positive = 0usize;
    let mut negative = 0usize;
    for token in word_splitter().split(&lower) {
        if POSITIVE_WORDS.contains(&token) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token) {
            negative += 1;
        }
    }
    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

/// Common-word overlap over the first 100 tokens. English wins ties
/// against both, Spanish wins its tie against French; a language needs a
/// non-zero score to be chosen at all.
pub fn detect_language(text: &str) -> Language {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = word_splitter()
        .split(&lower)
        .filter(|t| !t.is_empty())
        .take(LANGUAGE_SAMPLE_TOKENS)
        .collect();

    let english = overlap(&tokens, ENGLISH_COMMON);
    let spanish = overlap(&tokens, SPANISH_COMMON);
    let french = overlap(&tokens, FRENCH_COMMON);

    if english > 0 && english >= spanish && english >= french {
        Language::English
    } else if spanish > 0 && spanish >= french {
        Language::Spanish
    } else if french > 0 {
        Language::French
    } else {
        Language::Unknown
    }
}

fn overlap(tokens: &[&str], common: &[&str]) -> usize {
    tokens.iter().filter(|t| common.contains(t)).count()
}

// ── Word lists ───────────────────────────────────────────────────────────────

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "his", "how", "its", "may", "new", "now", "two", "way", "who", "did",
    "get", "him", "she", "too", "use", "about", "above", "after", "again", "also", "been",
    "before", "being", "between", "both", "could", "does", "down", "during", "each", "from",
    "have", "here", "into", "just", "more", "most", "only", "other", "over", "same", "some",
    "such", "than", "that", "their", "them", "then", "there", "these", "they", "this", "those",
    "through", "under", "until", "very", "were", "what", "when", "where", "which", "while",
    "will", "with", "would", "your",
];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "love",
    "loved", "best", "perfect", "happy", "beautiful", "brilliant", "outstanding", "superb",
    "positive", "success", "successful", "enjoy", "enjoyed", "impressive", "pleased",
    "delightful", "recommend",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "hated", "worst", "poor", "disappointing",
    "disappointed", "negative", "fail", "failed", "failure", "broken", "problem", "problems",
    "wrong", "sad", "angry", "annoying", "useless", "waste", "boring", "frustrating",
];

const ENGLISH_COMMON: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
];

const SPANISH_COMMON: &[&str] = &[
    "el", "la", "de", "que", "y", "en", "un", "ser", "se", "no", "haber", "por", "con", "su",
    "para", "como", "estar", "tener", "le", "lo", "todo", "pero", "más", "hacer", "o",
    "poder", "decir", "este", "ir", "otro", "ese", "si", "me", "ya", "porque",
];

const FRENCH_COMMON: &[&str] = &[
    "le", "de", "un", "être", "et", "à", "il", "avoir", "ne", "je", "son", "que", "se", "qui",
    "ce", "dans", "en", "du", "elle", "au", "pour", "pas", "sur", "faire", "plus", "dire",
    "mon", "lui", "nous", "comme", "mais", "ou", "leur",
];
