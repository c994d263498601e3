use axum::{extract::State, response::Html};

use crate::{pages, state::AppState};

/// Secret key, debug flag and database path, for any caller.
pub async fn settings(State(state): State<AppState>) -> Html<String> {
    pages::settings(&state.config.exposed())
}
