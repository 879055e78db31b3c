//! Phrase segmentation for plagiarism scans, plus the aggregated report.

use serde::{Deserialize, Serialize};

use crate::stats::is_sentence_terminator;

/// Sentences at or below this many characters are skipped entirely.
pub const MIN_SENTENCE_CHARS: usize = 20;
/// Shortest phrase worth scanning.
pub const MIN_PHRASE_CHARS: usize = 30;
/// Sentences longer than this are re-cut with a sliding word window.
pub const LONG_SENTENCE_CHARS: usize = 100;
/// Upper bound on phrases per scan.
pub const MAX_PHRASES: usize = 10;

/// Sliding window size and step, in words.
const WINDOW_WORDS: usize = 12;
const WINDOW_STEP: usize = 5;
/// Window starts stop once fewer than this many words remain.
const WINDOW_TAIL_WORDS: usize = 8;

/// Split `text` into the phrases a plagiarism scan will check.
///
/// Sentences come from splitting on runs of `.`, `!`, `?`. Short
/// sentences are dropped; medium ones are kept whole; long ones are cut
/// into overlapping twelve-word windows. The result is capped at
/// [`MAX_PHRASES`] to bound downstream work. An empty result is valid.
pub fn segment_phrases(text: &str) -> Vec<String> {
    let sentences = text
        .split(is_sentence_terminator)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS);

    let mut phrases = Vec::new();
    for sentence in sentences {
        let chars = sentence.chars().count();
        if chars > LONG_SENTENCE_CHARS {
            let words: Vec<&str> = sentence.split(' ').collect();
            let last_start = words.len().saturating_sub(WINDOW_TAIL_WORDS);
            let mut start = 0;
            while start < last_start {
                let end = (start + WINDOW_WORDS).min(words.len());
                let phrase = words[start..end].join(" ");
                if phrase.chars().count() > MIN_PHRASE_CHARS {
                    phrases.push(phrase);
                }
                start += WINDOW_STEP;
            }
        } else if chars > MIN_PHRASE_CHARS {
            phrases.push(sentence.to_string());
        }
    }

    phrases.truncate(MAX_PHRASES);
    phrases
}

/// A phrase flagged as matching existing content, with its sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    pub phrase: String,
    pub urls: Vec<String>,
}

/// Aggregated outcome of one plagiarism scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    /// Percentage of scanned phrases not flagged as matched, 0-100.
    pub originality_score: u32,
    pub total_phrases: usize,
    pub unique_phrases: usize,
    pub matched_phrases: usize,
    pub matches: Vec<PhraseMatch>,
}

impl PlagiarismReport {
    /// Build a report for `total_phrases` scanned phrases of which
    /// `matches` were flagged. `matches.len()` must not exceed
    /// `total_phrases`; an empty scan scores 100.
    pub fn new(total_phrases: usize, matches: Vec<PhraseMatch>) -> Self {
        debug_assert!(matches.len() <= total_phrases);
        let matched_phrases = matches.len().min(total_phrases);
        let unique_phrases = total_phrases - matched_phrases;
        let originality_score = if total_phrases == 0 {
            100
        } else {
            ((unique_phrases as f64 / total_phrases as f64) * 100.0).round() as u32
        };

        PlagiarismReport {
            originality_score,
            total_phrases,
            unique_phrases,
            matched_phrases,
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn match_for(phrase: &str) -> PhraseMatch {
        PhraseMatch {
            phrase: phrase.to_string(),
            urls: vec!["https://example.com/article1".to_string()],
        }
    }

    #[test]
    fn test_empty_input_yields_no_phrases() {
        assert!(segment_phrases("").is_empty());
        assert!(segment_phrases("Short. Tiny! No?").is_empty());
    }

    #[test]
    fn test_medium_sentence_kept_whole() {
        let text = "This sentence is long enough to be scanned as one phrase.";
        let phrases = segment_phrases(text);
        assert_eq!(
            phrases,
            vec!["This sentence is long enough to be scanned as one phrase".to_string()]
        );
    }

    #[test]
    fn test_sentence_between_20_and_30_chars_is_dropped() {
        // 26 chars trimmed: past the sentence filter but below phrase size
        let text = "abcdefghij abcdefghij abcd.";
        assert!(segment_phrases(text).is_empty());
    }

    #[test]
    fn test_long_sentence_cut_into_windows() {
        let words: Vec<String> = (0..30).map(|i| format!("word{i:02}")).collect();
        let text = format!("{}.", words.join(" "));
        let phrases = segment_phrases(&text);

        // window starts at 0, 5, 10, 15, 20 (stops before 30 - 8 = 22)
        assert_eq!(phrases.len(), 5);
        assert!(phrases[0].starts_with("word00"));
        assert!(phrases[1].starts_with("word05"));
        assert_eq!(phrases[0].split(' ').count(), 12);
        // last window is clamped to the sentence end
        assert_eq!(phrases[4].split(' ').count(), 10);
    }

    #[test]
    fn test_single_unbroken_long_word_produces_nothing() {
        let text = format!("{}.", "a".repeat(150));
        assert!(segment_phrases(&text).is_empty());
    }

    #[test]
    fn test_never_more_than_ten_phrases() {
        let sentence = "Each of these sentences is long enough to be kept whole";
        let text = format!("{}. ", sentence).repeat(25);
        assert_eq!(segment_phrases(&text).len(), MAX_PHRASES);
    }

    #[test]
    fn test_report_invariants() {
        let report = PlagiarismReport::new(4, vec![match_for("a"), match_for("b")]);
        assert_eq!(report.total_phrases, 4);
        assert_eq!(report.matched_phrases, 2);
        assert_eq!(report.unique_phrases, 2);
        assert_eq!(report.originality_score, 50);
    }

    #[test]
    fn test_empty_report_scores_100() {
        let report = PlagiarismReport::new(0, Vec::new());
        assert_eq!(report.originality_score, 100);
        assert_eq!(report.total_phrases, 0);
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        // 2 of 3 unique: 66.67 rounds to 67
        let report = PlagiarismReport::new(3, vec![match_for("a")]);
        assert_eq!(report.originality_score, 67);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(PlagiarismReport::new(1, Vec::new())).unwrap();
        assert_eq!(json["originalityScore"], 100);
        assert_eq!(json["totalPhrases"], 1);
        assert_eq!(json["uniquePhrases"], 1);
        assert_eq!(json["matchedPhrases"], 0);
    }
}
