use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::session::{Session, SESSION_COOKIE};
use crate::state::AppState;

/// Whatever session the request's cookie points at, if any.
///
/// Never rejects: each handler decides for itself what an anonymous caller gets.
pub struct CurrentSession {
    pub token: Option<String>,
    pub session: Option<Session>,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) else {
            return Ok(Self {
                token: None,
                session: None,
            });
        };
        let session = state.sessions.get(&token).await;
        Ok(Self {
            token: Some(token),
            session,
        })
    }
}
