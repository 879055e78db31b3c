//! Error types for the TextKit server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::grammar::GrammarApiError;

/// Server error types. Validation failures carry the exact message the
/// client shows; collaborator failures are translated to distinguishable
/// status codes and never leak upstream details.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    EmptyInput(&'static str),

    #[error("Invalid input type. Text must be a string.")]
    InvalidType,

    #[error("{0}")]
    TooShort(&'static str),

    #[error("{0}")]
    TooLong(&'static str),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API key invalid or expired. Please check your API configuration.")]
    AuthError,

    #[error("Failed to check grammar. Please try again later.")]
    Upstream(u16),

    #[error("Unexpected API response format")]
    UpstreamFormat,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::EmptyInput(msg) => (StatusCode::BAD_REQUEST, (*msg).to_string()),
            ServerError::InvalidType => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::TooShort(msg) => (StatusCode::BAD_REQUEST, (*msg).to_string()),
            ServerError::TooLong(msg) => (StatusCode::BAD_REQUEST, (*msg).to_string()),
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            ServerError::AuthError => (StatusCode::UNAUTHORIZED, self.to_string()),
            ServerError::Upstream(code) => {
                // propagate the upstream status when it is a valid code
                let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, self.to_string())
            }
            ServerError::UpstreamFormat => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ServerError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<GrammarApiError> for ServerError {
    fn from(err: GrammarApiError) -> Self {
        match err {
            GrammarApiError::RateLimited => ServerError::RateLimited,
            GrammarApiError::Auth => ServerError::AuthError,
            GrammarApiError::Status(code) => ServerError::Upstream(code),
            GrammarApiError::Format => ServerError::UpstreamFormat,
            GrammarApiError::Transport(e) => ServerError::Internal(e.to_string()),
        }
    }
}
