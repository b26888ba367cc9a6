use sqlx::PgPool;

use crate::error::ApiError;
use crate::photos::repo::{self, Photo};

/// A photo about to be saved. Without an id it inserts; with one it merges
/// into the row owned by `user_id`.
#[derive(Debug, Clone)]
pub struct PhotoDraft {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub url: String,
    pub description: Option<String>,
    pub user_id: i64,
}

#[derive(Clone)]
pub struct PhotoService {
    db: PgPool,
}

impl PhotoService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<Photo>, ApiError> {
        let photos = repo::list_by_user(&self.db, user_id).await?;
        Ok(photos)
    }

    /// Ownership is part of the query, not a post-hoc check, so another
    /// user's photo looks exactly like a missing one.
    pub async fn get_by_id(&self, id: i64, user_id: i64) -> Result<Photo, ApiError> {
        repo::find_scoped(&self.db, id, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("photo not found".into()))
    }

    pub async fn save(&self, draft: PhotoDraft) -> Result<Photo, ApiError> {
        match draft.id {
            None => {
                let photo = repo::insert(
                    &self.db,
                    draft.title.as_deref(),
                    &draft.url,
                    draft.description.as_deref(),
                    draft.user_id,
                )
                .await?;
                Ok(photo)
            }
            Some(id) => {
                let photo = Photo {
                    id,
                    title: draft.title,
                    url: draft.url,
                    description: draft.description,
                    user_id: draft.user_id,
                };
                repo::update_scoped(&self.db, &photo)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("photo not found".into()))
            }
        }
    }

    pub async fn remove(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        let deleted = repo::delete_scoped(&self.db, id, user_id).await?;
        if deleted {
            Ok(())
        } else {
            Err(ApiError::NotFound("photo not found".into()))
        }
    }
}
