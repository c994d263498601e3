use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::{
    fetch::{fetch_external, FetchOutcome},
    pages,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub url: String,
}

pub async fn search_page() -> Html<String> {
    pages::search()
}

/// Fetch whatever `url` names on behalf of the caller.
#[instrument(skip_all)]
pub async fn search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    if form.url.is_empty() {
        return pages::search().into_response();
    }

    match fetch_external(&state.http, &form.url).await {
        FetchOutcome::Fetched {
            status_code,
            content,
        } => Json(json!({
            "success": true,
            "content": content,
            "status_code": status_code,
        }))
        .into_response(),
        FetchOutcome::Failed { message } => Json(json!({
            "success": false,
            "message": message,
        }))
        .into_response(),
    }
}
