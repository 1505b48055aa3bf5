//! Publisher platform service
//!
//! Publishers create posts, readers browse a paginated/searchable feed and
//! like posts, and publishers read per-day engagement analytics. Stateless
//! request handlers over a shared Postgres store; identity comes from an
//! external provider's RS256 session tokens.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
