/// Post management for publishers
///
/// Create, update, delete and the publisher's own listing. All operations
/// take the caller's `AuthContext` explicitly and run through the shared
/// guards in `middleware::permissions`.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::post_repo;
use crate::error::Result;
use crate::middleware::{check_post_ownership, require_publisher, AuthContext};
use crate::models::{OwnPost, Post};

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post owned by the caller.
    pub async fn create_post(&self, ctx: &AuthContext, title: &str, content: &str) -> Result<Post> {
        require_publisher(ctx)?;

        let post = post_repo::create_post(&self.pool, ctx.user_id, title, content).await?;

        tracing::info!(post_id = %post.id, publisher_id = %ctx.user_id, "post created");
        Ok(post)
    }

    /// Replace a post's title and content. Owner only.
    pub async fn update_post(
        &self,
        ctx: &AuthContext,
        post_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post> {
        require_publisher(ctx)?;

        let existing = post_repo::find_post_by_id(&self.pool, post_id).await?;
        check_post_ownership(ctx, existing.as_ref())?;

        let post = post_repo::update_post(&self.pool, post_id, title, content).await?;
        Ok(post)
    }

    /// Delete a post. Owner only.
    pub async fn delete_post(&self, ctx: &AuthContext, post_id: Uuid) -> Result<()> {
        require_publisher(ctx)?;

        let existing = post_repo::find_post_by_id(&self.pool, post_id).await?;
        check_post_ownership(ctx, existing.as_ref())?;

        post_repo::delete_post(&self.pool, post_id).await?;

        tracing::info!(%post_id, publisher_id = %ctx.user_id, "post deleted");
        Ok(())
    }

    /// The caller's own posts, newest first, with like counts.
    pub async fn own_posts(&self, ctx: &AuthContext) -> Result<Vec<OwnPost>> {
        require_publisher(ctx)?;

        let posts = post_repo::find_own_posts(&self.pool, ctx.user_id).await?;
        Ok(posts)
    }
}
