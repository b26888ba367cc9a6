use axum::{routing::get, Router};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(handlers::current_user).post(handlers::create_user),
    )
}
