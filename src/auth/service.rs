use sqlx::PgPool;

use crate::auth::jwt::JwtKeys;
use crate::auth::password;
use crate::error::ApiError;
use crate::users::repo;

/// The one message for every credential failure; it never reveals whether
/// the e-mail exists.
pub const INVALID_CREDENTIALS: &str = "E-mail or password are invalid.";

#[derive(Clone)]
pub struct LoginService {
    db: PgPool,
}

impl LoginService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Unknown e-mail and wrong password are indistinguishable to the caller.
    pub async fn check_credentials(&self, email: &str, plain: &str) -> Result<bool, ApiError> {
        match repo::find_by_email(&self.db, email).await.map_err(ApiError::from)? {
            Some(user) => Ok(password::verify_password(plain, &user.password_hash)),
            None => Ok(false),
        }
    }

    /// Mints an access token for the user behind `email`. Assumes the
    /// credentials were already checked.
    pub async fn issue_token(&self, keys: &JwtKeys, email: &str) -> Result<String, ApiError> {
        let user = repo::find_by_email(&self.db, email)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.into()))?;
        let token = keys.sign_access(user.id)?;
        Ok(token)
    }
}
