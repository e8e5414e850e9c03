//! POST /summarize { github_url: string }
//!
//! Fetch → filter → generate. Errors before a snapshot exists (bad URL,
//! missing repository, GitHub failure) are returned as HTTP errors. Once the
//! snapshot exists the response is always 200 with a `SummaryResult`, using
//! the fallback text when generation fails.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::models::{SummarizeRequest, SummaryResult};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/summarize", post(summarize))
        .with_state(state)
}

async fn summarize(
    State(state): State<SharedState>,
    request: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummaryResult>> {
    let Json(request) = request.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let (repo, snapshot) = state.github.fetch_url(&request.github_url).await?;
    let payload = state.filter.apply(&snapshot);
    tracing::info!(
        "Summarizing {}: {} of {} root entries kept, README excerpt {} chars",
        repo,
        payload.entries.len(),
        snapshot.entries.len(),
        payload.readme_excerpt.chars().count()
    );

    let outcome = state.generator.generate(&payload).await;
    if outcome.is_fallback() {
        tracing::info!("Returning fallback summary for {}", repo);
    }

    Ok(Json(outcome.into_result()))
}
