/// Business logic for publisher-service
///
/// Each service is a request-scoped struct over the shared pool. The pure
/// aggregation logic (page splitting, day bucketing, gap filling) lives in
/// plain functions here so it can be tested without a store.
pub mod analytics;
pub mod feed;
pub mod likes;
pub mod posts;

pub use analytics::AnalyticsService;
pub use feed::FeedService;
pub use likes::LikeService;
pub use posts::PostService;
