//! API handlers for the TextKit server
//!
//! Provides REST endpoints for:
//! - Grammar checking (proxied to the upstream service)
//! - Plagiarism scanning (simulated match lookup)
//! - Word/character statistics
//! - Case conversion

use axum::{extract::State, Json};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use textkit_core::casing::CaseRule;
use textkit_core::phrases::{self, PhraseMatch, PlagiarismReport};
use textkit_core::stats::{self, TextStatistics};

use crate::error::ServerError;
use crate::grammar::GrammarIssue;
use crate::state::AppState;

/// Hard cap on grammar-check submissions, in characters.
const GRAMMAR_MAX_CHARS: usize = 20_000;
/// Bounds on plagiarism-scan submissions, in characters.
const PLAGIARISM_MIN_CHARS: usize = 50;
const PLAGIARISM_MAX_CHARS: usize = 10_000;

/// Chance that the simulated lookup flags a phrase as matched.
const MATCH_PROBABILITY: f64 = 0.2;

/// Placeholder sources attached to simulated matches.
const PLACEHOLDER_SOURCES: [&str; 2] = [
    "https://example.com/article1",
    "https://example.com/article2",
];

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "textkit-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Body accepted by the text-checking endpoints. `text` stays a raw
/// JSON value so validation can tell a missing field from a wrong type.
#[derive(Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

/// Validate the `text` field shared by the checking endpoints. Returns
/// the submitted string, or the first validation failure in order:
/// absent/empty value, wrong type, blank after trimming.
fn require_text(text: Option<&Value>, empty_message: &'static str) -> Result<String, ServerError> {
    let value = text.ok_or(ServerError::EmptyInput(empty_message))?;

    if is_absent(value) {
        return Err(ServerError::EmptyInput(empty_message));
    }

    let s = match value {
        Value::String(s) => s,
        _ => return Err(ServerError::InvalidType),
    };

    if s.trim().is_empty() {
        return Err(ServerError::EmptyInput("Please enter non-empty text to check"));
    }

    Ok(s.clone())
}

/// JSON values the `{text}` contract treats as no input at all.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Grammar check response
#[derive(Serialize)]
pub struct GrammarCheckResponse {
    pub matches: Vec<GrammarIssue>,
    pub language: LanguageInfo,
}

#[derive(Serialize)]
pub struct LanguageInfo {
    pub name: String,
}

/// Handler: POST /api/grammar-check
pub async fn handle_grammar_check(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<GrammarCheckResponse>, ServerError> {
    let text = require_text(req.text.as_ref(), "Please enter some text to check")?;

    if text.chars().count() > GRAMMAR_MAX_CHARS {
        return Err(ServerError::TooLong(
            "Text is too long. Maximum 20,000 characters allowed.",
        ));
    }

    info!(chars = text.chars().count(), "grammar check");

    let matches = state.grammar.check(&text).await?;
    debug!(issues = matches.len(), "grammar upstream answered");

    Ok(Json(GrammarCheckResponse {
        matches,
        language: LanguageInfo {
            name: "English".to_string(),
        },
    }))
}

/// Handler: POST /api/plagiarism-check
pub async fn handle_plagiarism_check(
    Json(req): Json<CheckRequest>,
) -> Result<Json<PlagiarismReport>, ServerError> {
    let text = require_text(
        req.text.as_ref(),
        "Please enter some text to check for plagiarism",
    )?;

    if text.trim().chars().count() < PLAGIARISM_MIN_CHARS {
        return Err(ServerError::TooShort(
            "Please enter at least 50 characters for meaningful plagiarism detection",
        ));
    }
    if text.chars().count() > PLAGIARISM_MAX_CHARS {
        return Err(ServerError::TooLong(
            "Text exceeds maximum limit. Please keep it under 10,000 characters.",
        ));
    }

    let phrases = phrases::segment_phrases(&text);
    info!(phrases = phrases.len(), "plagiarism scan");

    Ok(Json(simulate_scan(phrases, &mut rand::thread_rng())))
}

/// Simulated match lookup. Stands in for a search-backed similarity
/// check: each phrase is flagged at random rather than searched, so the
/// resulting scores carry no real signal.
fn simulate_scan<R: Rng>(phrases: Vec<String>, rng: &mut R) -> PlagiarismReport {
    let total = phrases.len();
    let matches: Vec<PhraseMatch> = phrases
        .into_iter()
        .filter(|_| rng.gen::<f64>() < MATCH_PROBABILITY)
        .map(|phrase| PhraseMatch {
            phrase,
            urls: PLACEHOLDER_SOURCES.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    PlagiarismReport::new(total, matches)
}

/// Handler: POST /api/word-count
pub async fn handle_word_count(
    Json(req): Json<CheckRequest>,
) -> Result<Json<TextStatistics>, ServerError> {
    let text = match req.text {
        Some(Value::String(s)) => s,
        _ => return Err(ServerError::InvalidType),
    };

    Ok(Json(stats::analyze(&text)))
}

/// Case conversion request
#[derive(Deserialize)]
pub struct CaseConvertRequest {
    #[serde(default)]
    pub text: Option<Value>,
    pub rule: String,
}

/// Case conversion response
#[derive(Serialize)]
pub struct CaseConvertResponse {
    pub result: String,
    pub rule: CaseRule,
}

/// Handler: POST /api/case-convert
pub async fn handle_case_convert(
    Json(req): Json<CaseConvertRequest>,
) -> Result<Json<CaseConvertResponse>, ServerError> {
    let text = require_text(req.text.as_ref(), "Please enter some text to convert")?;

    let rule = CaseRule::from_id(&req.rule).ok_or_else(|| {
        ServerError::InvalidRequest(format!(
            "Unknown case rule '{}'. Supported: upper, lower, title, sentence, camel, pascal, snake, kebab",
            req.rule
        ))
    })?;

    debug!(rule = %rule, "case conversion");

    Ok(Json(CaseConvertResponse {
        result: rule.apply(&text),
        rule,
    }))
}
