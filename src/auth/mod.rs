use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod extractors;
pub mod handlers;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
