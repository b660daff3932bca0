//! Static reference data: price ranges and cuisine types
//!
//! Both tables are seeded by the schema migration and never mutated by the
//! application.

use serde::{Deserialize, Serialize};

/// Price range entity (`$` through `$$$$`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PriceRange {
    pub price_range_id: i64,
    pub price_symbol: String,
}

/// Cuisine type entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CuisineType {
    pub cuisine_id: i64,
    pub cuisine_name: String,
}
