use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::Result;
use crate::middleware::AuthContext;
use crate::services::analytics::{AnalyticsService, ANALYTICS_DEFAULT_DAYS};

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyticsParams {
    #[validate(range(min = 7, max = 90))]
    pub days: Option<u32>,
}

/// Engagement totals and daily series for the caller's own posts.
/// Publisher only.
pub async fn get_analytics(
    pool: web::Data<PgPool>,
    ctx: AuthContext,
    query: web::Query<AnalyticsParams>,
) -> Result<HttpResponse> {
    query.validate()?;

    let days = query.days.unwrap_or(ANALYTICS_DEFAULT_DAYS);

    let service = AnalyticsService::new((**pool).clone());
    let summary = service.compute(&ctx, ctx.user_id, days).await?;

    Ok(HttpResponse::Ok().json(summary))
}
