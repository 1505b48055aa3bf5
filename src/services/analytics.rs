/// Engagement analytics for publishers
///
/// Aggregates a publisher's posts and likes over a rolling window into a
/// gap-filled daily time series. The window is anchored to the moment of the
/// call, not to calendar midnight, so the newest bucket covers a partial day;
/// that is intentional for a live dashboard and two calls made at different
/// times of day may bucket edge records differently.
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::{like_repo, post_repo};
use crate::error::Result;
use crate::middleware::{check_analytics_access, AuthContext};
use crate::models::{AnalyticsSummary, DayPoint};

pub const ANALYTICS_DEFAULT_DAYS: u32 = 30;

pub struct AnalyticsService {
    pool: PgPool,
}

impl AnalyticsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Totals and a daily series for the publisher's last `days` days.
    ///
    /// Only the owning publisher may read their numbers. `days` must already
    /// be validated into 7..=90 at the edge. The series always has exactly
    /// `days` entries, oldest first, and its per-day sums equal the returned
    /// totals.
    pub async fn compute(
        &self,
        ctx: &AuthContext,
        publisher_id: Uuid,
        days: u32,
    ) -> Result<AnalyticsSummary> {
        check_analytics_access(ctx, publisher_id)?;

        let now = Utc::now();
        let since = now - Duration::days(i64::from(days));

        let post_times = post_repo::post_timestamps_since(&self.pool, publisher_id, since).await?;
        let like_times = like_repo::like_timestamps_since(&self.pool, publisher_id, since).await?;

        let total_posts = post_times.len() as i64;
        let total_likes = like_times.len() as i64;

        let series = build_series(now, days, &post_times, &like_times);

        Ok(AnalyticsSummary {
            days,
            total_posts,
            total_likes,
            series,
        })
    }
}

/// UTC calendar-day bucket key, `YYYY-MM-DD`.
fn day_key(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

fn count_by_day(timestamps: &[DateTime<Utc>]) -> HashMap<String, i64> {
    let mut buckets = HashMap::new();
    for ts in timestamps {
        *buckets.entry(day_key(*ts)).or_insert(0) += 1;
    }
    buckets
}

/// Build the gap-filled series: one entry per calendar day from `days - 1`
/// days ago through today, oldest first, zeros for days without activity.
pub fn build_series(
    now: DateTime<Utc>,
    days: u32,
    post_times: &[DateTime<Utc>],
    like_times: &[DateTime<Utc>],
) -> Vec<DayPoint> {
    let posts_by_day = count_by_day(post_times);
    let likes_by_day = count_by_day(like_times);

    (0..i64::from(days))
        .rev()
        .map(|i| {
            let key = day_key(now - Duration::days(i));
            DayPoint {
                posts: posts_by_day.get(&key).copied().unwrap_or(0),
                likes: likes_by_day.get(&key).copied().unwrap_or(0),
                date: key,
            }
        })
        .collect()
}
