//! Deterministic case-conversion rules.
//!
//! Every rule is a total function from string to string. Word
//! boundaries are whitespace, found by explicit scanning.

use serde::{Deserialize, Serialize};

/// One of the eight supported conversion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseRule {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl CaseRule {
    pub const ALL: [CaseRule; 8] = [
        CaseRule::Upper,
        CaseRule::Lower,
        CaseRule::Title,
        CaseRule::Sentence,
        CaseRule::Camel,
        CaseRule::Pascal,
        CaseRule::Snake,
        CaseRule::Kebab,
    ];

    /// Look up a rule by its wire id (e.g. `"kebab"`).
    pub fn from_id(id: &str) -> Option<CaseRule> {
        match id {
            "upper" => Some(CaseRule::Upper),
            "lower" => Some(CaseRule::Lower),
            "title" => Some(CaseRule::Title),
            "sentence" => Some(CaseRule::Sentence),
            "camel" => Some(CaseRule::Camel),
            "pascal" => Some(CaseRule::Pascal),
            "snake" => Some(CaseRule::Snake),
            "kebab" => Some(CaseRule::Kebab),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            CaseRule::Upper => "upper",
            CaseRule::Lower => "lower",
            CaseRule::Title => "title",
            CaseRule::Sentence => "sentence",
            CaseRule::Camel => "camel",
            CaseRule::Pascal => "pascal",
            CaseRule::Snake => "snake",
            CaseRule::Kebab => "kebab",
        }
    }

    /// Apply the rule to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseRule::Upper => text.to_uppercase(),
            CaseRule::Lower => text.to_lowercase(),
            CaseRule::Title => to_title(text),
            CaseRule::Sentence => to_sentence(text),
            CaseRule::Camel => join_capitalized(text, false),
            CaseRule::Pascal => join_capitalized(text, true),
            CaseRule::Snake => join_with(text, '_'),
            CaseRule::Kebab => join_with(text, '-'),
        }
    }
}

impl std::fmt::Display for CaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Uppercase the first character of each whitespace-delimited word,
/// lowercase the rest. Whitespace is preserved as-is.
fn to_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Lowercase everything, then uppercase the very first character and the
/// first character after every period-plus-whitespace boundary.
fn to_sentence(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut seen_period = false;
    let mut at_boundary = false;
    for (i, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            if seen_period {
                at_boundary = true;
            }
            out.push(c);
            continue;
        }
        if i == 0 || at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_boundary = false;
        seen_period = c == '.';
    }
    out
}

/// camelCase / PascalCase: words joined with no separator, each word
/// lowercased with its leading character uppercased. `capitalize_first`
/// selects Pascal over camel.
fn join_capitalized(text: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 && !capitalize_first {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// snake_case / kebab-case: lowercase with every whitespace run collapsed
/// into a single separator, including runs at the edges of the input.
fn join_with(text: &str, sep: char) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(sep);
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}
