//! API route handlers.
//!
//! - `health`: liveness message (GET /)
//! - `summarize`: repository summary (POST /summarize)

pub mod health;
pub mod summarize;

use axum::Router;

use crate::state::SharedState;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(summarize::routes(state))
}
