use axum::{extract::State, http::StatusCode, response::Html};
use tracing::{error, info, instrument};

use crate::{pages, state::AppState, users::User};

/// Full user listing. No session is consulted.
#[instrument(skip_all)]
pub async fn admin(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let users = User::list_all(&state.db).await.map_err(|e| {
        error!(error = %e, "list users failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    info!(count = users.len(), "admin listing served");
    Ok(pages::admin(&users))
}
