//! Reference data reads: price ranges and cuisine types

use shared::models::{CuisineType, PriceRange};
use sqlx::PgPool;

use super::BoxError;

pub async fn list_price_ranges(pool: &PgPool) -> Result<Vec<PriceRange>, BoxError> {
    let rows: Vec<PriceRange> = sqlx::query_as(
        "SELECT price_range_id, price_symbol FROM price_ranges ORDER BY price_range_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_cuisines(pool: &PgPool) -> Result<Vec<CuisineType>, BoxError> {
    let rows: Vec<CuisineType> =
        sqlx::query_as("SELECT cuisine_id, cuisine_name FROM cuisine_types ORDER BY cuisine_name")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

/// Whether the given price range id exists.
pub async fn price_range_exists(pool: &PgPool, id: i64) -> Result<bool, BoxError> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT price_range_id FROM price_ranges WHERE price_range_id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Whether every given cuisine id exists.
pub async fn cuisines_exist(pool: &PgPool, ids: &[i64]) -> Result<bool, BoxError> {
    if ids.is_empty() {
        return Ok(true);
    }
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(DISTINCT cuisine_id) FROM cuisine_types WHERE cuisine_id = ANY($1)")
            .bind(ids)
            .fetch_one(pool)
            .await?;
    let distinct: std::collections::HashSet<i64> = ids.iter().copied().collect();
    Ok(count as usize == distinct.len())
}
