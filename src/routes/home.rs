use axum::response::Html;
use tracing::instrument;

use crate::{auth::extractors::CurrentSession, pages};

pub async fn index() -> Html<String> {
    pages::index()
}

/// Renders for anyone; anonymous callers are shown as "Guest".
#[instrument(skip_all)]
pub async fn dashboard(current: CurrentSession) -> Html<String> {
    let username = current
        .session
        .map(|s| s.username)
        .unwrap_or_else(|| "Guest".into());
    pages::dashboard(&username)
}

pub async fn not_found() -> (axum::http::StatusCode, Html<String>) {
    (axum::http::StatusCode::NOT_FOUND, pages::not_found())
}
