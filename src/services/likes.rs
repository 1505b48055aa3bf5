/// Like toggle service
///
/// The toggle is two conditional statements, each atomic at the store, so
/// there is no read-then-act window: the delete either removes the caller's
/// like or proves there was none, and the insert rides on the
/// (user_id, post_id) unique constraint and the post foreign key. Concurrent
/// identical toggles cannot create duplicate likes or double-delete.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::like_repo;
use crate::error::{AppError, Result};
use crate::middleware::AuthContext;

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle the caller's like on a post. Returns the resulting state.
    pub async fn toggle(&self, ctx: &AuthContext, post_id: Uuid) -> Result<bool> {
        if like_repo::delete_like(&self.pool, ctx.user_id, post_id).await? {
            return Ok(false);
        }

        // `None` means a concurrent identical toggle inserted first; either
        // way the caller's like now exists.
        match like_repo::insert_like(&self.pool, ctx.user_id, post_id).await {
            Ok(_) => Ok(true),
            Err(err) if is_foreign_key_violation(&err) => {
                Err(AppError::NotFound("Post not found".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// The likes table's post_id foreign key firing means the post does not
/// exist; everything else is a genuine store failure.
fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.is_foreign_key_violation()
    )
}
