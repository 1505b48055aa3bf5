/// Authorization guards for publisher-service
///
/// Centralized checks keyed by (resource, caller). Every mutation and every
/// publisher-only read goes through these instead of re-deriving the check
/// inline. Ownership failures answer exactly like a missing row so callers
/// cannot probe for the existence of other publishers' posts.
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::AuthContext;
use crate::models::{Post, Role};

/// Require the caller to hold the PUBLISHER role.
pub fn require_publisher(ctx: &AuthContext) -> Result<()> {
    if ctx.role == Role::Publisher {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Publisher role required".to_string(),
        ))
    }
}

/// Require the caller to own the post, if it exists at all.
///
/// `None` and "owned by someone else" produce the same Forbidden answer.
pub fn check_post_ownership(ctx: &AuthContext, post: Option<&Post>) -> Result<()> {
    match post {
        Some(post) if post.publisher_id == ctx.user_id => Ok(()),
        _ => Err(AppError::Forbidden(
            "You don't have permission to modify this post".to_string(),
        )),
    }
}

/// Require that the caller is asking for their own analytics.
pub fn check_analytics_access(ctx: &AuthContext, publisher_id: Uuid) -> Result<()> {
    require_publisher(ctx)?;
    if ctx.user_id == publisher_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Analytics are only visible to the owning publisher".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ctx(role: Role) -> AuthContext {
        AuthContext {
            user_id: Uuid::new_v4(),
            role,
        }
    }

    fn post_owned_by(publisher_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            content: "c".to_string(),
            publisher_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn reader_is_not_a_publisher() {
        assert!(matches!(
            require_publisher(&ctx(Role::User)),
            Err(AppError::Forbidden(_))
        ));
        assert!(require_publisher(&ctx(Role::Publisher)).is_ok());
    }

    #[test]
    fn missing_and_unowned_posts_are_indistinguishable() {
        let caller = ctx(Role::Publisher);
        let foreign = post_owned_by(Uuid::new_v4());

        let missing = check_post_ownership(&caller, None).unwrap_err();
        let unowned = check_post_ownership(&caller, Some(&foreign)).unwrap_err();

        assert_eq!(missing.to_string(), unowned.to_string());
    }

    #[test]
    fn owner_passes_ownership_check() {
        let caller = ctx(Role::Publisher);
        let own = post_owned_by(caller.user_id);
        assert!(check_post_ownership(&caller, Some(&own)).is_ok());
    }

    #[test]
    fn analytics_restricted_to_owner() {
        let caller = ctx(Role::Publisher);
        assert!(check_analytics_access(&caller, caller.user_id).is_ok());
        assert!(check_analytics_access(&caller, Uuid::new_v4()).is_err());
        assert!(check_analytics_access(&ctx(Role::User), caller.user_id).is_err());
    }
}
