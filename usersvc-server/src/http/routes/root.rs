//! Welcome endpoint

use axum::{routing::get, Router};

pub const WELCOME: &str = "Welcome! Demo server is running";

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Welcome text", body = String, content_type = "text/plain"))
)]
pub async fn welcome() -> &'static str {
    WELCOME
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}
