//! Pagination walk over a fixed dataset.
//!
//! Drives the page-splitting logic the way the handler does, with the store's
//! ordering and seek semantics reproduced over an in-memory dataset, and
//! checks the cross-page properties: no overlap, no gaps, stable global
//! ordering, cursor absent on the last page.

use chrono::{DateTime, Duration, Utc};
use publisher_service::db::post_repo::FeedRow;
use publisher_service::services::feed::{ilike_pattern, normalize_search, split_page};
use uuid::Uuid;

struct Dataset {
    rows: Vec<(Uuid, DateTime<Utc>, String)>,
}

impl Dataset {
    /// `n` posts, newest first, with deliberate created_at ties to exercise
    /// the id tiebreak.
    fn new(n: usize) -> Self {
        let base = Utc::now();
        let mut rows: Vec<(Uuid, DateTime<Utc>, String)> = (0..n)
            .map(|i| {
                // Pairs of posts share a timestamp.
                let created_at = base - Duration::minutes((i / 2) as i64);
                (Uuid::new_v4(), created_at, format!("post {}", i))
            })
            .collect();

        // Store ordering: created_at DESC, id DESC.
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { rows }
    }

    /// Reproduce the repo's keyset query: rows strictly after the cursor
    /// row's (created_at, id) position, first `fetch` of them.
    fn feed_page(&self, cursor: Option<Uuid>, fetch: usize) -> Vec<FeedRow> {
        let start = match cursor {
            None => 0,
            Some(id) => match self.rows.iter().position(|r| r.0 == id) {
                Some(pos) => pos + 1,
                None => return Vec::new(),
            },
        };

        self.rows[start..]
            .iter()
            .take(fetch)
            .map(|(id, created_at, title)| FeedRow {
                id: *id,
                title: title.clone(),
                content: "body".to_string(),
                created_at: *created_at,
                publisher_id: Uuid::new_v4(),
                publisher_name: "pub".to_string(),
                like_count: 0,
                viewer_liked: false,
            })
            .collect()
    }
}

#[test]
fn walking_pages_covers_the_dataset_exactly_once() {
    let dataset = Dataset::new(23);
    let limit = 10;

    let mut seen: Vec<Uuid> = Vec::new();
    let mut cursor: Option<Uuid> = None;
    let mut pages = 0;

    loop {
        let rows = dataset.feed_page(cursor, limit + 1);
        let (page, next_cursor) = split_page(rows, limit);
        seen.extend(page.iter().map(|r| r.id));
        pages += 1;

        match next_cursor {
            Some(c) => cursor = Some(c),
            None => break,
        }
        assert!(pages < 100, "cursor walk did not terminate");
    }

    assert_eq!(pages, 3);
    let expected: Vec<Uuid> = dataset.rows.iter().map(|r| r.0).collect();
    assert_eq!(seen, expected, "concatenated pages must preserve the global order");
}

#[test]
fn two_pages_do_not_overlap_and_keep_descending_order() {
    let dataset = Dataset::new(30);
    let limit = 10;

    let (page1, cursor) = split_page(dataset.feed_page(None, limit + 1), limit);
    let cursor = cursor.expect("30 rows must yield a second page");
    let (page2, _) = split_page(dataset.feed_page(Some(cursor), limit + 1), limit);

    let ids1: Vec<Uuid> = page1.iter().map(|r| r.id).collect();
    let ids2: Vec<Uuid> = page2.iter().map(|r| r.id).collect();
    assert!(ids1.iter().all(|id| !ids2.contains(id)));

    let combined: Vec<&FeedRow> = page1.iter().chain(page2.iter()).collect();
    for pair in combined.windows(2) {
        let earlier = (pair[0].created_at, pair[0].id);
        let later = (pair[1].created_at, pair[1].id);
        assert!(earlier > later, "global created_at/id ordering broken across pages");
    }
}

#[test]
fn short_dataset_has_no_next_cursor() {
    let dataset = Dataset::new(4);
    let (page, cursor) = split_page(dataset.feed_page(None, 11), 10);
    assert_eq!(page.len(), 4);
    assert_eq!(cursor, None);
}

#[test]
fn inserts_ahead_of_the_cursor_do_not_shift_later_pages() {
    let mut dataset = Dataset::new(12);
    let limit = 5;

    let (page1, cursor) = split_page(dataset.feed_page(None, limit + 1), limit);
    let cursor = cursor.unwrap();

    // New posts land at the top of the feed between the two requests.
    let newest = Utc::now() + Duration::minutes(10);
    dataset
        .rows
        .insert(0, (Uuid::new_v4(), newest, "late arrival".to_string()));

    let (page2, _) = split_page(dataset.feed_page(Some(cursor), limit + 1), limit);

    let ids1: Vec<Uuid> = page1.iter().map(|r| r.id).collect();
    let ids2: Vec<Uuid> = page2.iter().map(|r| r.id).collect();
    assert!(
        ids1.iter().all(|id| !ids2.contains(id)),
        "concurrent insert must not make items repeat on the next page"
    );
}

#[test]
fn search_term_matching_nothing_yields_empty_page_without_cursor() {
    // The store-side ILIKE is simulated: no titles match the pattern.
    let pattern = normalize_search(Some("  zebra  ")).map(|q| ilike_pattern(&q));
    assert_eq!(pattern.as_deref(), Some("%zebra%"));

    let (page, cursor) = split_page(Vec::new(), 10);
    assert!(page.is_empty());
    assert_eq!(cursor, None);
}
