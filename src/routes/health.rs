use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub fn routes() -> Router {
    Router::new().route("/", get(home))
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Service is running! Send POST to /summarize" }))
}
