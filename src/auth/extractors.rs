use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Required authentication: rejects with 401 unless the bearer token is
/// valid and its subject still resolves to a user.
pub struct AuthUser(pub User);

/// Optional authentication: any failure resolves to `None` and the handler
/// decides what to do without a current user.
pub struct MaybeAuthUser(pub Option<User>);

async fn authenticate(parts: &Parts, state: &AppState) -> Result<User, ApiError> {
    let header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing Authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .ok_or_else(|| ApiError::Unauthorized("invalid auth scheme".into()))?;

    let keys = JwtKeys::from_ref(state);
    let claims = keys.verify(token).map_err(|_| {
        warn!("invalid or expired token");
        ApiError::Unauthorized("invalid or expired token".into())
    })?;

    // The subject must still exist; a token outliving its user grants nothing.
    state
        .users
        .get_by_id(claims.sub)
        .await
        .map_err(|_| ApiError::Unauthorized("invalid or expired token".into()))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).await.map(AuthUser)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(authenticate(parts, state).await.ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn bare_parts() -> Parts {
        let (parts, _) = Request::builder().uri("/api/photos").body(()).unwrap().into_parts();
        parts
    }

    fn parts_with_auth(value: &str) -> Parts {
        let (parts, _) = Request::builder()
            .uri("/api/photos")
            .header(axum::http::header::AUTHORIZATION, value)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn missing_header_rejects_required_auth() {
        let state = AppState::fake();
        let mut parts = bare_parts();
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn wrong_scheme_rejects_required_auth() {
        let state = AppState::fake();
        let mut parts = parts_with_auth("Basic dXNlcjpwYXNz");
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_token_rejects_required_auth() {
        let state = AppState::fake();
        let mut parts = parts_with_auth("Bearer not-a-jwt");
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn optional_auth_is_none_on_failure() {
        let state = AppState::fake();
        let mut parts = bare_parts();
        let MaybeAuthUser(user) = MaybeAuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert!(user.is_none());
    }
}
