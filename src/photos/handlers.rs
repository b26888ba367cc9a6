use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::photos::dto::{PhotoPayload, PhotoResponse};
use crate::photos::service::PhotoDraft;
use crate::state::AppState;

#[instrument(skip(state, user))]
pub async fn list_photos(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<PhotoResponse>>, ApiError> {
    let photos = state.photos.list(user.id).await?;
    Ok(Json(photos.into_iter().map(PhotoResponse::from).collect()))
}

#[instrument(skip(state, user, payload))]
pub async fn create_photo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<PhotoPayload>,
) -> Result<(StatusCode, Json<PhotoResponse>), ApiError> {
    let photo = state
        .photos
        .save(PhotoDraft {
            id: None,
            title: payload.title,
            url: payload.url,
            description: payload.description,
            user_id: user.id,
        })
        .await?;

    info!(photo_id = photo.id, user_id = user.id, "photo created");
    Ok((StatusCode::CREATED, Json(photo.into())))
}

#[instrument(skip(state, user))]
pub async fn get_photo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<PhotoResponse>, ApiError> {
    let photo = state.photos.get_by_id(id, user.id).await?;
    Ok(Json(photo.into()))
}

#[instrument(skip(state, user, payload))]
pub async fn update_photo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<PhotoPayload>,
) -> Result<Json<PhotoResponse>, ApiError> {
    let photo = state
        .photos
        .save(PhotoDraft {
            id: Some(id),
            title: payload.title,
            url: payload.url,
            description: payload.description,
            user_id: user.id,
        })
        .await?;

    info!(photo_id = photo.id, user_id = user.id, "photo updated");
    Ok(Json(photo.into()))
}

#[instrument(skip(state, user))]
pub async fn delete_photo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.photos.remove(id, user.id).await?;
    info!(photo_id = id, user_id = user.id, "photo deleted");
    Ok(StatusCode::NO_CONTENT)
}
