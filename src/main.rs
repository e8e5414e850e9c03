//! Repository Summarizer - turns a GitHub URL into a three-field JSON summary
//!
//! # Usage
//! ```bash
//! repo-summarizer                    # Serve on 127.0.0.1:8000
//! repo-summarizer --host 0.0.0.0 -p 9000
//! curl -X POST localhost:8000/summarize \
//!      -H 'content-type: application/json' \
//!      -d '{"github_url": "https://github.com/org/repo"}'
//! ```
//!
//! Requires `GITHUB_TOKEN` and `LLM_API_KEY` in the environment or a `.env` file.

mod config;
mod error;
mod filter;
mod github;
mod llm;
mod models;
mod routes;
mod state;

use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use state::AppState;

/// Repository Summarizer - summarize GitHub repositories with an LLM
#[derive(Parser)]
#[command(name = "repo-summarizer")]
#[command(about = "Summarize a GitHub repository into structured JSON", long_about = None)]
struct Cli {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "8000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("✗ Configuration error: {}", e);
            eprintln!("  Set GITHUB_TOKEN and LLM_API_KEY (or put them in .env)");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::from_config(&config)?);
    tracing::info!(
        "Using model {} (README limit {} chars, timeout {:?})",
        config.llm.model,
        config.filter.readme_char_limit,
        config.request_timeout
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on http://{}", addr);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        tracing::info!("Shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
