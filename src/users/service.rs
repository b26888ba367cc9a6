use sqlx::PgPool;

use crate::error::ApiError;
use crate::users::repo::{self, User};

/// A user about to be saved. Without an id it inserts, with one it merges
/// into the existing row.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
}

#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert-or-merge by id. A duplicate e-mail surfaces as a validation
    /// failure, not a storage error.
    pub async fn save(&self, draft: UserDraft) -> Result<User, ApiError> {
        match draft.id {
            None => {
                let user = repo::insert(
                    &self.db,
                    draft.name.as_deref(),
                    &draft.email,
                    &draft.password_hash,
                )
                .await?;
                Ok(user)
            }
            Some(id) => {
                let user = User {
                    id,
                    name: draft.name,
                    email: draft.email,
                    password_hash: draft.password_hash,
                };
                repo::update(&self.db, &user)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("user not found".into()))
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, ApiError> {
        repo::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("user not found".into()))
    }

    /// Operator tooling only; not reachable over HTTP.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let users = repo::list_all(&self.db).await?;
        Ok(users)
    }
}
