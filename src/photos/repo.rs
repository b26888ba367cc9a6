use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Photo record in the database. Every photo belongs to exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: i64,
    pub title: Option<String>,
    pub url: String,
    pub description: Option<String>,
    pub user_id: i64,
}

pub async fn list_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<Photo>> {
    sqlx::query_as::<_, Photo>(
        r#"
        SELECT id, title, url, description, user_id
        FROM photos
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Lookup scoped by owner. A photo owned by someone else is as absent as a
/// photo that does not exist.
pub async fn find_scoped(db: &PgPool, id: i64, user_id: i64) -> sqlx::Result<Option<Photo>> {
    sqlx::query_as::<_, Photo>(
        r#"
        SELECT id, title, url, description, user_id
        FROM photos
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await
}

pub async fn insert(
    db: &PgPool,
    title: Option<&str>,
    url: &str,
    description: Option<&str>,
    user_id: i64,
) -> sqlx::Result<Photo> {
    sqlx::query_as::<_, Photo>(
        r#"
        INSERT INTO photos (title, url, description, user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, url, description, user_id
        "#,
    )
    .bind(title)
    .bind(url)
    .bind(description)
    .bind(user_id)
    .fetch_one(db)
    .await
}

pub async fn update_scoped(db: &PgPool, photo: &Photo) -> sqlx::Result<Option<Photo>> {
    sqlx::query_as::<_, Photo>(
        r#"
        UPDATE photos
        SET title = $3, url = $4, description = $5
        WHERE id = $1 AND user_id = $2
        RETURNING id, title, url, description, user_id
        "#,
    )
    .bind(photo.id)
    .bind(photo.user_id)
    .bind(photo.title.as_deref())
    .bind(&photo.url)
    .bind(photo.description.as_deref())
    .fetch_optional(db)
    .await
}

pub async fn delete_scoped(db: &PgPool, id: i64, user_id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM photos
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
