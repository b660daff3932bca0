//! Review database operations
//!
//! Reviews are insert-and-delete only; there is no update path.

use shared::models::{Review, ReviewCreate};
use sqlx::PgPool;

use super::BoxError;

/// List a restaurant's reviews, newest first.
pub async fn list_for_restaurant(pool: &PgPool, restaurant_id: i64) -> Result<Vec<Review>, BoxError> {
    let rows: Vec<Review> = sqlx::query_as(
        r#"
        SELECT review_id, restaurant_id, rating, review_text, review_date
        FROM reviews
        WHERE restaurant_id = $1
        ORDER BY review_date DESC, review_id DESC
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert a review with the server-assigned current date.
pub async fn create(pool: &PgPool, data: &ReviewCreate) -> Result<Review, BoxError> {
    let review: Review = sqlx::query_as(
        r#"
        INSERT INTO reviews (restaurant_id, rating, review_text, review_date)
        VALUES ($1, $2, $3, CURRENT_DATE)
        RETURNING review_id, restaurant_id, rating, review_text, review_date
        "#,
    )
    .bind(data.restaurant_id)
    .bind(data.rating)
    .bind(&data.review_text)
    .fetch_one(pool)
    .await?;
    Ok(review)
}

/// Batch delete by review id. Returns the number of rows removed.
pub async fn delete(pool: &PgPool, ids: &[i64]) -> Result<u64, BoxError> {
    let result = sqlx::query("DELETE FROM reviews WHERE review_id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
