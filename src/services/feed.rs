/// Feed query service
///
/// Builds the public paginated feed: optional title search, keyset cursor,
/// per-post author and engagement enrichment. Read-only.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::post_repo::{self, FeedRow};
use crate::error::Result;
use crate::models::{FeedPage, PostView, PublisherRef};

pub const FEED_DEFAULT_LIMIT: u32 = 10;

pub struct FeedService {
    pool: PgPool,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Return one page of the feed and the cursor for the next one.
    ///
    /// `limit` must already be validated into 1..=30 at the edge.
    /// `viewer_id` is the signed-in caller, if any; it only affects the
    /// per-item `viewer_liked` flag, never which items are returned.
    pub async fn query_feed(
        &self,
        cursor: Option<Uuid>,
        limit: u32,
        search: Option<&str>,
        viewer_id: Option<Uuid>,
    ) -> Result<FeedPage> {
        let pattern = normalize_search(search).map(|q| ilike_pattern(&q));

        // Over-fetch one row: its presence tells us there is a next page.
        let rows = post_repo::feed_page(
            &self.pool,
            i64::from(limit) + 1,
            pattern.as_deref(),
            cursor,
            viewer_id,
        )
        .await?;

        let (page, next_cursor) = split_page(rows, limit as usize);

        let items = page
            .into_iter()
            .map(|row| into_post_view(row, viewer_id.is_some()))
            .collect();

        Ok(FeedPage { items, next_cursor })
    }
}

fn into_post_view(row: FeedRow, has_viewer: bool) -> PostView {
    PostView {
        id: row.id,
        title: row.title,
        content: row.content,
        created_at: row.created_at,
        publisher: PublisherRef {
            id: row.publisher_id,
            name: row.publisher_name,
        },
        like_count: row.like_count,
        viewer_liked: has_viewer.then_some(row.viewer_liked),
    }
}

/// Trim the search text; empty or whitespace-only means "no filter".
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}

/// Build a case-insensitive containment pattern, escaping LIKE wildcards so
/// user text matches literally.
pub fn ilike_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Split an over-fetched result into the returned page and the next cursor.
///
/// The store was asked for `limit + 1` rows. If it produced more than
/// `limit`, the surplus row is dropped and the cursor anchors at the last
/// row actually returned; the next page seeks strictly past it.
pub fn split_page(mut rows: Vec<FeedRow>, limit: usize) -> (Vec<FeedRow>, Option<Uuid>) {
    if rows.len() > limit {
        rows.truncate(limit);
        let next_cursor = rows.last().map(|row| row.id);
        (rows, next_cursor)
    } else {
        (rows, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn rows(n: usize) -> Vec<FeedRow> {
        let now = Utc::now();
        (0..n)
            .map(|i| FeedRow {
                id: Uuid::new_v4(),
                title: format!("post {}", i),
                content: "body".to_string(),
                created_at: now - Duration::minutes(i as i64),
                publisher_id: Uuid::new_v4(),
                publisher_name: "pub".to_string(),
                like_count: 0,
                viewer_liked: false,
            })
            .collect()
    }

    #[test]
    fn full_page_yields_cursor_at_last_returned_item() {
        let input = rows(11);
        let expected_cursor = input[9].id;

        let (page, cursor) = split_page(input, 10);

        assert_eq!(page.len(), 10);
        assert_eq!(cursor, Some(expected_cursor));
    }

    #[test]
    fn short_page_has_no_cursor() {
        let (page, cursor) = split_page(rows(7), 10);
        assert_eq!(page.len(), 7);
        assert_eq!(cursor, None);
    }

    #[test]
    fn exactly_limit_rows_is_the_last_page() {
        let (page, cursor) = split_page(rows(10), 10);
        assert_eq!(page.len(), 10);
        assert_eq!(cursor, None);
    }

    #[test]
    fn empty_result_is_an_empty_last_page() {
        let (page, cursor) = split_page(rows(0), 10);
        assert!(page.is_empty());
        assert_eq!(cursor, None);
    }

    #[test]
    fn whitespace_search_is_no_filter() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("")), None);
        assert_eq!(normalize_search(Some("   \t")), None);
        assert_eq!(normalize_search(Some("  rust ")), Some("rust".to_string()));
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(ilike_pattern("rust"), "%rust%");
        assert_eq!(ilike_pattern("100%"), "%100\\%%");
        assert_eq!(ilike_pattern("a_b"), "%a\\_b%");
        assert_eq!(ilike_pattern("c\\d"), "%c\\\\d%");
    }

    #[test]
    fn anonymous_viewer_gets_no_liked_flag() {
        let mut row = rows(1).remove(0);
        row.viewer_liked = true;
        let anonymous = into_post_view(row, false);
        assert_eq!(anonymous.viewer_liked, None);

        let mut row = rows(1).remove(0);
        row.viewer_liked = true;
        let signed_in = into_post_view(row, true);
        assert_eq!(signed_in.viewer_liked, Some(true));
    }
}
