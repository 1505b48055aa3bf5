use crate::models::{OwnPost, Post};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// One feed row as it comes back from the store: the post joined with its
/// author plus the per-post engagement subqueries.
#[derive(Debug, sqlx::FromRow)]
pub struct FeedRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub publisher_id: Uuid,
    pub publisher_name: String,
    pub like_count: i64,
    pub viewer_liked: bool,
}

/// Create a new post owned by `publisher_id`
pub async fn create_post(
    pool: &PgPool,
    publisher_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, publisher_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, publisher_id, created_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(publisher_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, publisher_id, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Replace a post's title and content
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2
        WHERE id = $3
        RETURNING id, title, content, publisher_id, created_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Delete a post (likes cascade at the store)
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// All posts by a publisher, newest first, each with its like count
pub async fn find_own_posts(
    pool: &PgPool,
    publisher_id: Uuid,
) -> Result<Vec<OwnPost>, sqlx::Error> {
    let posts = sqlx::query_as::<_, OwnPost>(
        r#"
        SELECT p.id, p.title, p.content, p.created_at,
               (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count
        FROM posts p
        WHERE p.publisher_id = $1
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )
    .bind(publisher_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// One page of the global feed, keyset-paginated.
///
/// Ordering is `created_at DESC, id DESC`; the cursor row's own position is
/// looked up and everything strictly after it (in that ordering) is returned.
/// Anchoring to a row instead of a numeric offset keeps pages stable while
/// new posts are being inserted. An unknown cursor id yields an empty page.
///
/// `title_pattern` is a ready-made ILIKE pattern (wildcards already escaped
/// by the caller). `viewer_id` toggles the per-viewer liked flag; for
/// anonymous reads the flag comes back false and is dropped at the edge.
pub async fn feed_page(
    pool: &PgPool,
    fetch: i64,
    title_pattern: Option<&str>,
    cursor: Option<Uuid>,
    viewer_id: Option<Uuid>,
) -> Result<Vec<FeedRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, FeedRow>(
        r#"
        SELECT p.id, p.title, p.content, p.created_at,
               u.id AS publisher_id, u.name AS publisher_name,
               (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count,
               ($4::uuid IS NOT NULL AND EXISTS(
                   SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $4
               )) AS viewer_liked
        FROM posts p
        JOIN users u ON u.id = p.publisher_id
        WHERE ($2::text IS NULL OR p.title ILIKE $2)
          AND ($3::uuid IS NULL OR (p.created_at, p.id) <
               (SELECT c.created_at, c.id FROM posts c WHERE c.id = $3))
        ORDER BY p.created_at DESC, p.id DESC
        LIMIT $1
        "#,
    )
    .bind(fetch)
    .bind(title_pattern)
    .bind(cursor)
    .bind(viewer_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Creation timestamps of a publisher's posts at or after `since`
pub async fn post_timestamps_since(
    pool: &PgPool,
    publisher_id: Uuid,
    since: DateTime<Utc>,
) -> Result<Vec<DateTime<Utc>>, sqlx::Error> {
    let timestamps: Vec<DateTime<Utc>> = sqlx::query_scalar(
        r#"
        SELECT created_at
        FROM posts
        WHERE publisher_id = $1 AND created_at >= $2
        "#,
    )
    .bind(publisher_id)
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(timestamps)
}
