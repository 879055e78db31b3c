//! Character, word, sentence, and paragraph counts for a piece of text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// A blank line: newline, optional whitespace, newline.
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Read-only snapshot of counts derived from one input. Field names are
/// camelCase on the wire to match what the web client renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
}

/// Compute statistics for `text`. Total over all inputs; blank input
/// yields zero words, sentences, and paragraphs.
pub fn analyze(text: &str) -> TextStatistics {
    let character_count = text.chars().count();
    let character_count_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

    if text.trim().is_empty() {
        return TextStatistics {
            character_count,
            character_count_no_spaces,
            word_count: 0,
            sentence_count: 0,
            paragraph_count: 0,
        };
    }

    let word_count = text.split_whitespace().count();

    let sentence_count = text
        .split(is_sentence_terminator)
        .filter(|s| !s.trim().is_empty())
        .count();

    let paragraph_count = PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();

    TextStatistics {
        character_count,
        character_count_no_spaces,
        word_count,
        sentence_count,
        paragraph_count,
    }
}

/// Characters that end a sentence.
pub(crate) fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
