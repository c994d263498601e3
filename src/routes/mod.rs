use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod admin;
pub mod home;
pub mod profile;
pub mod search;
pub mod settings;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/dashboard", get(home::dashboard))
        .route("/admin", get(admin::admin))
        .route("/profile", get(profile::profile))
        .route("/update_profile", post(profile::update_profile))
        .route("/search", get(search::search_page).post(search::search))
        .route("/settings", get(settings::settings))
}
