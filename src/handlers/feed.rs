use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::middleware::maybe_auth_context;
use crate::services::feed::{FeedService, FEED_DEFAULT_LIMIT};

#[derive(Debug, Deserialize, Validate)]
pub struct FeedQueryParams {
    /// Id of the last item of the previous page
    pub cursor: Option<Uuid>,
    #[validate(range(min = 1, max = 30))]
    pub limit: Option<u32>,
    /// Title search text
    pub q: Option<String>,
}

/// Public paginated feed.
///
/// Anonymous access is allowed; a valid bearer token additionally yields the
/// per-item `viewer_liked` flag for that caller.
pub async fn get_feed(
    pool: web::Data<PgPool>,
    query: web::Query<FeedQueryParams>,
    http_req: HttpRequest,
) -> Result<HttpResponse> {
    query.validate()?;

    let viewer_id = maybe_auth_context(&http_req).map(|ctx| ctx.user_id);
    let limit = query.limit.unwrap_or(FEED_DEFAULT_LIMIT);

    let service = FeedService::new((**pool).clone());
    let page = service
        .query_feed(query.cursor, limit, query.q.as_deref(), viewer_id)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}
