//! Shared domain types for the restaurant catalog console
//!
//! Everything in this crate is pure: models, filter semantics, the unified
//! error type, map projection, and small helpers. All I/O lives in
//! `catalog-server`.

pub mod error;
pub mod geo;
pub mod models;
pub mod util;
