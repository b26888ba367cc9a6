use axum::{routing::get, Router};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/photos",
            get(handlers::list_photos).post(handlers::create_photo),
        )
        .route(
            "/photos/:id",
            get(handlers::get_photo)
                .put(handlers::update_photo)
                .delete(handlers::delete_photo),
        )
}
