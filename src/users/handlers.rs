use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument};

use crate::auth::extractors::MaybeAuthUser;
use crate::auth::password;
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, PublicUser};
use crate::users::service::UserDraft;

/// Returns the authenticated user. Authentication is optional at the
/// routing level; without a current user this answers 401 itself.
pub async fn current_user(
    MaybeAuthUser(user): MaybeAuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    match user {
        Some(user) => Ok(Json(user.into())),
        None => Err(ApiError::Unauthorized(
            "Unauthorized by lack of credentials.".into(),
        )),
    }
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(mut payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let password_hash = password::hash_password(&payload.password)?;
    let user = state
        .users
        .save(UserDraft {
            id: None,
            name: payload.name,
            email: payload.email,
            password_hash,
        })
        .await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}
