use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{dto::StatusResponse, extractors::CurrentSession},
    pages,
    state::AppState,
    users::{query, User},
};

#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub profile: String,
}

/// Caller's own profile; anonymous callers are sent to `/login`.
#[instrument(skip_all)]
pub async fn profile(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<Response, (StatusCode, String)> {
    let Some(session) = current.session else {
        return Ok(Redirect::to("/login").into_response());
    };

    let user = User::find_by_id(&state.db, session.user_id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = session.user_id, "profile lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    match user {
        Some(user) => Ok(pages::profile(&user).into_response()),
        None => {
            warn!(user_id = session.user_id, "session points at a missing user");
            Ok(Redirect::to("/login").into_response())
        }
    }
}

/// Replace the caller's profile text, stored exactly as sent.
#[instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    current: CurrentSession,
    Form(form): Form<ProfileForm>,
) -> Json<StatusResponse> {
    let Some(session) = current.session else {
        return Json(StatusResponse::fail("Not authenticated"));
    };

    match query::update_profile_bound(&state.db, session.user_id, &form.profile).await {
        Ok(rows) => {
            info!(user_id = session.user_id, rows, "profile updated");
            Json(StatusResponse::ok("Profile updated successfully"))
        }
        Err(e) => {
            error!(error = %e, user_id = session.user_id, "profile update failed");
            Json(StatusResponse::fail(format!("Error updating profile: {e}")))
        }
    }
}
