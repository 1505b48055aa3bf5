/// Data models for publisher-service
///
/// Rows owned by the external record store (`users`, `posts`, `likes`) plus
/// the read-side view types the feed and analytics endpoints return.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, as asserted by the identity provider in the session token.
/// Only publishers may create posts or read analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Publisher,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub publisher_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One like row. At most one per (user, post); the store enforces this with a
/// unique constraint, which is what makes the toggle safe under races.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Public identity of a post's author as embedded in feed items.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PublisherRef {
    pub id: Uuid,
    pub name: String,
}

/// A post enriched for the feed: author, like count, and (for signed-in
/// viewers only) whether this viewer liked it.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub publisher: PublisherRef,
    pub like_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_liked: Option<bool>,
}

/// One page of the feed plus the cursor for the next one.
#[derive(Debug, Serialize)]
pub struct FeedPage {
    pub items: Vec<PostView>,
    pub next_cursor: Option<Uuid>,
}

/// A publisher's own post with its engagement count (the `mine` listing).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OwnPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
}

/// One calendar day of the analytics series (UTC, `YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPoint {
    pub date: String,
    pub posts: i64,
    pub likes: i64,
}

/// Full analytics response: totals are raw fetched-row counts and always
/// equal the series sums by construction.
#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub days: u32,
    pub total_posts: i64,
    pub total_likes: i64,
    pub series: Vec<DayPoint>,
}
