use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Form, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, RegisterForm, StatusResponse},
        extractors::CurrentSession,
    },
    pages,
    session::{Session, SESSION_COOKIE},
    state::AppState,
    users::{query, NewUser, Role, StoreError, User},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/register", get(register_page).post(register))
        .route("/logout", get(logout))
}

pub async fn login_page() -> Html<String> {
    pages::login()
}

pub async fn register_page() -> Html<String> {
    pages::register()
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    current: CurrentSession,
    Form(form): Form<LoginForm>,
) -> (CookieJar, Json<StatusResponse>) {
    let found =
        query::find_by_credentials_interpolated(&state.db, &form.username, &form.password).await;

    match found {
        Ok(Some(row)) => {
            // A repeat login replaces the caller's previous binding.
            if let Some(old) = current.token {
                state.sessions.clear(&old).await;
            }
            let session = Session::from(row);
            info!(user_id = session.user_id, username = %session.username, role = %session.role, "user logged in");
            let token = state.sessions.create(session).await;
            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true);
            (jar.add(cookie), Json(StatusResponse::ok("Login successful")))
        }
        Ok(None) => {
            warn!(username = %form.username, "login invalid credentials");
            (jar, Json(StatusResponse::fail("Invalid credentials")))
        }
        Err(e) => {
            error!(error = %e, username = %form.username, "login query failed");
            (
                jar,
                Json(StatusResponse::fail(format!("Database error: {e}"))),
            )
        }
    }
}

#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<(StatusCode, Json<StatusResponse>), (StatusCode, String)> {
    let new = NewUser {
        username: &form.username,
        password: &form.password,
        email: &form.email,
        role: Role::User,
        profile: None,
    };

    match User::insert(&state.db, &new).await {
        Ok(user_id) => {
            info!(user_id, username = %form.username, "user registered");
            Ok((
                StatusCode::OK,
                Json(StatusResponse::ok("Registration successful")),
            ))
        }
        Err(StoreError::AlreadyExists) => {
            warn!(username = %form.username, "username already registered");
            Ok((
                StatusCode::CONFLICT,
                Json(StatusResponse::fail("Username already exists")),
            ))
        }
        Err(StoreError::Database(e)) => {
            error!(error = %e, "create user failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    current: CurrentSession,
) -> (CookieJar, Redirect) {
    if let Some(token) = current.token {
        if let Some(session) = state.sessions.clear(&token).await {
            info!(user_id = session.user_id, username = %session.username, "user logged out");
        }
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/"))
}
