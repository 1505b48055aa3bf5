use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::middleware::AuthContext;
use crate::services::PostService;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

/// Create a new post. Publisher only.
pub async fn create_post(
    pool: web::Data<PgPool>,
    ctx: AuthContext,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service.create_post(&ctx, &req.title, &req.content).await?;

    Ok(HttpResponse::Created().json(post))
}

/// Replace a post's title and content. Owner only.
pub async fn update_post(
    pool: web::Data<PgPool>,
    ctx: AuthContext,
    post_id: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service
        .update_post(&ctx, *post_id, &req.title, &req.content)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post. Owner only.
pub async fn delete_post(
    pool: web::Data<PgPool>,
    ctx: AuthContext,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.delete_post(&ctx, *post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// The caller's own posts with like counts. Publisher only.
pub async fn get_my_posts(pool: web::Data<PgPool>, ctx: AuthContext) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.own_posts(&ctx).await?;

    Ok(HttpResponse::Ok().json(posts))
}
