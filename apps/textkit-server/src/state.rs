//! Application state for the TextKit server

use crate::grammar::{GrammarClient, DEFAULT_API_URL};

/// Shared per-request state: the upstream grammar client with its
/// pooled HTTP connection. Everything else is computed per call.
#[derive(Clone)]
pub struct AppState {
    pub grammar: GrammarClient,
}

impl AppState {
    /// Build state from the environment. The API key comes from
    /// `TEXTGEARS_API_KEY`; without it grammar checks return an auth
    /// error.
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("TEXTGEARS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = std::env::var("TEXTGEARS_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        if api_key.is_none() {
            tracing::warn!("TEXTGEARS_API_KEY is not set; grammar checks will return an auth error");
        }

        Self {
            grammar: GrammarClient::new(reqwest::Client::new(), api_url, api_key),
        }
    }
}
