use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::AuthContext;
use crate::services::LikeService;

#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    pub liked: bool,
}

/// Toggle the caller's like on a post.
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    ctx: AuthContext,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let liked = service.toggle(&ctx, *post_id).await?;

    Ok(HttpResponse::Ok().json(ToggleLikeResponse { liked }))
}
