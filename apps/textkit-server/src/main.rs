//! TextKit API Server
//!
//! Backend for the TextKit writing tools. Provides REST endpoints for:
//!
//! - Grammar checking, proxied to an upstream grammar service
//! - Plagiarism scanning over segmented phrases (simulated matching)
//! - Word/character statistics
//! - Case conversion
//!
//! All endpoints are stateless; the only shared state is the upstream
//! client configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod grammar;
mod state;

use api::{
    handle_case_convert, handle_grammar_check, handle_health, handle_plagiarism_check,
    handle_word_count,
};
use state::AppState;

/// Command-line arguments for the TextKit server
#[derive(Parser, Debug)]
#[command(name = "textkit-server")]
#[command(about = "TextKit API server for writing tools")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TextKit server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .expect("Failed to create rate limiter config"),
    );

    // Upstream configuration comes from the environment
    let state = AppState::from_env();

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/grammar-check", post(handle_grammar_check))
        .route("/api/plagiarism-check", post(handle_plagiarism_check))
        .route("/api/word-count", post(handle_word_count))
        .route("/api/case-convert", post(handle_case_convert))
        // Apply middleware
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(listener, app).await?;

    Ok(())
}
