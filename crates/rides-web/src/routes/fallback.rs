//! Unmatched routes

use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use serde_json::{json, Value};

pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::warn!(%method, %uri, "No route matched");
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}
