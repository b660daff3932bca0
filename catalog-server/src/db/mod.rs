//! Database access layer
//!
//! Plain `sqlx` queries against PostgreSQL. Multi-statement writes run in a
//! single transaction; a failure anywhere rolls the whole operation back.

pub mod reference;
pub mod restaurants;
pub mod reviews;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
