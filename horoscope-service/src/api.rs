pub use crate::horoscope::horoscope_handler;
pub use crate::zodiac::zodiac_signs_handler;

use axum::{
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;

const INDEX_HTML: &str = include_str!("../pages/index.html");

/// GET /
/// Landing page; all data is fetched from the JSON endpoints.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
/// Liveness probe; answers without touching the horoscope table.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
