//! Restaurant catalog database operations

use shared::models::{RestaurantInput, RestaurantListing, Scope};
use sqlx::PgPool;

use super::BoxError;

/// Shared SELECT for hydrated listings: one row per restaurant with its
/// price symbol and alphabetically aggregated cuisine names.
const LISTING_SELECT: &str = r#"
    SELECT r.restaurant_id, r.name, r.description, r.website, r.street_address,
           r.city, r.state, r.zip_code, r.phone, r.latitude, r.longitude,
           r.is_active, pr.price_symbol,
           COALESCE(
               ARRAY_AGG(ct.cuisine_name ORDER BY ct.cuisine_name)
                   FILTER (WHERE ct.cuisine_name IS NOT NULL),
               ARRAY[]::TEXT[]
           ) AS cuisines
    FROM restaurants r
    LEFT JOIN restaurant_pricing rp ON rp.restaurant_id = r.restaurant_id
    LEFT JOIN price_ranges pr ON pr.price_range_id = rp.price_range_id
    LEFT JOIN restaurant_cuisines rc ON rc.restaurant_id = r.restaurant_id
    LEFT JOIN cuisine_types ct ON ct.cuisine_id = rc.cuisine_id
"#;

fn listing_sql(scope: Scope) -> String {
    let where_clause = match scope {
        Scope::ActiveOnly => "WHERE r.is_active",
        Scope::All => "",
    };
    format!(
        "{LISTING_SELECT} {where_clause} GROUP BY r.restaurant_id, pr.price_symbol ORDER BY r.name, r.restaurant_id"
    )
}

/// List restaurants in the given visibility scope, hydrated with price
/// symbol and cuisine names.
pub async fn list(pool: &PgPool, scope: Scope) -> Result<Vec<RestaurantListing>, BoxError> {
    let rows: Vec<RestaurantListing> = sqlx::query_as(&listing_sql(scope))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch one hydrated restaurant by id.
pub async fn get(pool: &PgPool, id: i64) -> Result<Option<RestaurantListing>, BoxError> {
    let sql = format!(
        "{LISTING_SELECT} WHERE r.restaurant_id = $1 GROUP BY r.restaurant_id, pr.price_symbol"
    );
    let row: Option<RestaurantListing> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row)
}

/// Whether a restaurant row exists (any scope).
pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, BoxError> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT restaurant_id FROM restaurants WHERE restaurant_id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Insert a restaurant with its pricing and cuisine associations in one
/// transaction. Returns the server-assigned id.
pub async fn create(pool: &PgPool, data: &RestaurantInput) -> Result<i64, BoxError> {
    let mut tx = pool.begin().await?;

    let (restaurant_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO restaurants (
            name, description, website, street_address, city, state,
            zip_code, phone, latitude, longitude, is_active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, TRUE)
        RETURNING restaurant_id
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.website)
    .bind(&data.street_address)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.zip_code)
    .bind(&data.phone)
    .bind(data.latitude)
    .bind(data.longitude)
    .fetch_one(&mut *tx)
    .await?;

    insert_associations(&mut tx, restaurant_id, data).await?;

    tx.commit().await?;
    Ok(restaurant_id)
}

/// Full-replace update: overwrite scalars, then delete and reinsert both
/// association sets, all in one transaction keyed by `id`.
///
/// Returns `false` (with nothing written) when the restaurant does not exist.
pub async fn update(pool: &PgPool, id: i64, data: &RestaurantInput) -> Result<bool, BoxError> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE restaurants
        SET name = $1, description = $2, website = $3, street_address = $4,
            city = $5, state = $6, zip_code = $7, phone = $8,
            latitude = $9, longitude = $10
        WHERE restaurant_id = $11
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.website)
    .bind(&data.street_address)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.zip_code)
    .bind(&data.phone)
    .bind(data.latitude)
    .bind(data.longitude)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        // Dropping the transaction rolls it back.
        return Ok(false);
    }

    sqlx::query("DELETE FROM restaurant_pricing WHERE restaurant_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM restaurant_cuisines WHERE restaurant_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    insert_associations(&mut tx, id, data).await?;

    tx.commit().await?;
    Ok(true)
}

async fn insert_associations(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    restaurant_id: i64,
    data: &RestaurantInput,
) -> Result<(), BoxError> {
    if let Some(price_range_id) = data.price_range_id {
        sqlx::query(
            "INSERT INTO restaurant_pricing (restaurant_id, price_range_id) VALUES ($1, $2)",
        )
        .bind(restaurant_id)
        .bind(price_range_id)
        .execute(&mut **tx)
        .await?;
    }

    if !data.cuisine_ids.is_empty() {
        let restaurant_ids: Vec<i64> = data.cuisine_ids.iter().map(|_| restaurant_id).collect();
        sqlx::query(
            "INSERT INTO restaurant_cuisines (restaurant_id, cuisine_id) SELECT * FROM UNNEST($1::bigint[], $2::bigint[])",
        )
        .bind(&restaurant_ids)
        .bind(&data.cuisine_ids)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

/// Batch archive/restore: flip the active flag for every given id.
/// Returns the number of rows touched.
pub async fn set_active(pool: &PgPool, ids: &[i64], active: bool) -> Result<u64, BoxError> {
    let result = sqlx::query("UPDATE restaurants SET is_active = $1 WHERE restaurant_id = ANY($2)")
        .bind(active)
        .bind(ids)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Batch hard delete in one transaction: cuisine associations first, then
/// pricing, then reviews, then the restaurant rows themselves.
/// Returns the number of restaurant rows removed.
pub async fn hard_delete(pool: &PgPool, ids: &[i64]) -> Result<u64, BoxError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM restaurant_cuisines WHERE restaurant_id = ANY($1)")
        .bind(ids)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM restaurant_pricing WHERE restaurant_id = ANY($1)")
        .bind(ids)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM reviews WHERE restaurant_id = ANY($1)")
        .bind(ids)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM restaurants WHERE restaurant_id = ANY($1)")
        .bind(ids)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_scope_filters_on_the_flag() {
        let sql = listing_sql(Scope::ActiveOnly);
        assert!(sql.contains("WHERE r.is_active"));
    }

    #[test]
    fn all_scope_has_no_visibility_clause() {
        let sql = listing_sql(Scope::All);
        assert!(!sql.contains("WHERE r.is_active"));
        assert!(sql.contains("GROUP BY r.restaurant_id"));
    }
}
