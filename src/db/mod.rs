/// Data access layer for publisher-service
///
/// Thin sqlx query functions over the shared Postgres pool. No business
/// logic lives here; services compose these calls.
pub mod like_repo;
pub mod post_repo;
