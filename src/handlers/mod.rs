/// HTTP handlers for publisher-service
///
/// Handlers validate input bounds before any store access, resolve the
/// caller identity, and delegate to the service layer.
pub mod analytics;
pub mod feed;
pub mod likes;
pub mod posts;

pub use analytics::get_analytics;
pub use feed::get_feed;
pub use likes::toggle_like;
pub use posts::{create_post, delete_post, get_my_posts, update_post};
