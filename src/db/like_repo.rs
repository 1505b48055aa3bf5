use crate::models::Like;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Remove a user's like from a post. Returns whether a like existed.
///
/// A single atomic statement: under concurrent identical toggles at most one
/// caller observes `true`.
pub async fn delete_like(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM likes
        WHERE user_id = $1 AND post_id = $2
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Insert a like, tolerating a concurrent identical insert.
///
/// `ON CONFLICT DO NOTHING` rides on the (user_id, post_id) unique
/// constraint, so the store can never hold a duplicate like even when two
/// toggles race; the loser of such a race gets `None` back. A nonexistent
/// post surfaces as a foreign-key violation on `post_id`, which the service
/// layer maps to NotFound.
pub async fn insert_like(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<Option<Like>, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (user_id, post_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, post_id) DO NOTHING
        RETURNING id, user_id, post_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(like)
}

/// Creation timestamps of likes on a publisher's posts at or after `since`
pub async fn like_timestamps_since(
    pool: &PgPool,
    publisher_id: Uuid,
    since: DateTime<Utc>,
) -> Result<Vec<DateTime<Utc>>, sqlx::Error> {
    let timestamps: Vec<DateTime<Utc>> = sqlx::query_scalar(
        r#"
        SELECT l.created_at
        FROM likes l
        JOIN posts p ON p.id = l.post_id
        WHERE p.publisher_id = $1 AND l.created_at >= $2
        "#,
    )
    .bind(publisher_id)
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(timestamps)
}
