//! Client for the upstream grammar-checking service.
//!
//! One GET per check, query-encoded text, fixed language tag. No
//! retries and no caching; the upstream's own latency governs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upstream endpoint. Overridable via `TEXTGEARS_API_URL` so
/// tests can point the client at a local stub.
pub const DEFAULT_API_URL: &str = "https://api.textgears.com/grammar";

const LANGUAGE: &str = "en-US";

/// Failures talking to the upstream service.
#[derive(Debug, Error)]
pub enum GrammarApiError {
    #[error("upstream rate limit exceeded")]
    RateLimited,

    #[error("upstream rejected the API key")]
    Auth,

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("upstream body is missing the `response` field")]
    Format,

    #[error("request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One grammar problem, shaped the way the web client renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarIssue {
    pub message: String,
    pub short_message: String,
    pub offset: usize,
    pub length: usize,
    pub replacements: Vec<Replacement>,
    pub rule: IssueRule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRule {
    pub category: RuleCategory,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCategory {
    pub name: String,
}

/// Upstream wire format: `{response: {errors: [...]}}`.
#[derive(Debug, Deserialize)]
struct UpstreamBody {
    response: Option<UpstreamResponse>,
}

#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    #[serde(default)]
    errors: Vec<UpstreamIssue>,
}

#[derive(Debug, Deserialize)]
struct UpstreamIssue {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    length: usize,
    better: Option<Vec<String>>,
}

/// Reusable client for the upstream service.
#[derive(Clone)]
pub struct GrammarClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl GrammarClient {
    pub fn new(http: reqwest::Client, api_url: String, api_key: Option<String>) -> Self {
        Self {
            http,
            api_url,
            api_key,
        }
    }

    /// Check `text` against the upstream service. Single attempt.
    pub async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarApiError> {
        let key = self.api_key.as_deref().ok_or(GrammarApiError::Auth)?;

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("text", text), ("language", LANGUAGE), ("key", key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "grammar upstream error");
            return Err(match status.as_u16() {
                429 => GrammarApiError::RateLimited,
                401 | 403 => GrammarApiError::Auth,
                code => GrammarApiError::Status(code),
            });
        }

        let body: UpstreamBody = response.json().await?;
        let upstream = match body.response {
            Some(r) => r,
            None => {
                tracing::error!("grammar upstream body has no `response` field");
                return Err(GrammarApiError::Format);
            }
        };

        Ok(upstream
            .errors
            .into_iter()
            .map(GrammarIssue::from_upstream)
            .collect())
    }
}

impl GrammarIssue {
    /// Reshape one upstream error record. When the upstream suggests
    /// alternatives they become both the headline message and the
    /// replacement list; otherwise the upstream message stands alone.
    fn from_upstream(issue: UpstreamIssue) -> Self {
        let alternatives = issue.better.unwrap_or_default();
        let message = if alternatives.is_empty() {
            issue.message.clone()
        } else {
            format!("Suggestion: {}", alternatives.join(", "))
        };

        GrammarIssue {
            message,
            short_message: issue.kind.clone(),
            offset: issue.offset,
            length: issue.length,
            replacements: alternatives
                .into_iter()
                .map(|value| Replacement { value })
                .collect(),
            rule: IssueRule {
                category: RuleCategory { name: issue.kind },
                description: issue.message,
            },
        }
    }
}
