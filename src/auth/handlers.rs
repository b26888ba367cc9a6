use axum::{
    extract::{FromRef, State},
    Json,
};
use tracing::{info, instrument, warn};

use crate::auth::dto::{LoginRequest, TokenResponse};
use crate::auth::jwt::JwtKeys;
use crate::auth::service::INVALID_CREDENTIALS;
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(mut payload): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !state
        .login
        .check_credentials(&payload.email, &payload.password)
        .await?
    {
        warn!(email = %payload.email, "login rejected");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = state.login.issue_token(&keys, &payload.email).await?;

    info!(email = %payload.email, "login accepted");
    Ok(Json(TokenResponse { access_token }))
}
