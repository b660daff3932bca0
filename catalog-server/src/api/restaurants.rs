//! Browse/search and add/update handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use shared::error::{AppError, ErrorCode};
use shared::models::{RestaurantFilter, RestaurantInput, RestaurantListing, Scope};

use super::ApiResult;
use crate::db::{reference, restaurants};
use crate::error::ServiceResult;
use crate::state::AppState;

/// Query parameters for the list/search view
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Visibility scope; defaults to active rows only
    pub scope: Option<Scope>,
    /// Case-insensitive name substring
    pub name: Option<String>,
    /// Exact price symbol; "All" disables
    pub price: Option<String>,
    /// Comma-separated cuisine names (OR within the set)
    pub cuisines: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedRestaurant {
    pub restaurant_id: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdatedRestaurant {
    pub restaurant_id: i64,
}

pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<RestaurantListing>> {
    let scope = query.scope.unwrap_or_default();
    let filter = RestaurantFilter::from_params(
        query.name.as_deref(),
        query.price.as_deref(),
        query.cuisines.as_deref(),
    );

    let rows = restaurants::list(&state.pool, scope).await?;

    let rows = if filter.is_empty() {
        rows
    } else {
        rows.into_iter().filter(|r| filter.matches(r)).collect()
    };
    Ok(Json(rows))
}

pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<RestaurantListing> {
    let row = restaurants::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
    Ok(Json(row))
}

pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(data): Json<RestaurantInput>,
) -> ApiResult<CreatedRestaurant> {
    data.validate()?;
    verify_associations(&state, &data).await?;

    let restaurant_id = restaurants::create(&state.pool, &data).await?;
    tracing::info!(restaurant_id, name = %data.name, "Restaurant created");
    Ok(Json(CreatedRestaurant { restaurant_id }))
}

pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<RestaurantInput>,
) -> ApiResult<UpdatedRestaurant> {
    data.validate()?;
    verify_associations(&state, &data).await?;

    let updated = restaurants::update(&state.pool, id, &data).await?;
    if !updated {
        return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
    }
    tracing::info!(restaurant_id = id, "Restaurant updated");
    Ok(Json(UpdatedRestaurant { restaurant_id: id }))
}

/// Reject unknown reference ids before opening the write transaction, so the
/// operator gets a field-level error instead of a constraint violation.
async fn verify_associations(state: &AppState, data: &RestaurantInput) -> ServiceResult<()> {
    if let Some(price_range_id) = data.price_range_id
        && !reference::price_range_exists(&state.pool, price_range_id).await?
    {
        return Err(AppError::new(ErrorCode::PriceRangeUnknown)
            .with_detail("price_range_id", price_range_id)
            .into());
    }
    if !reference::cuisines_exist(&state.pool, &data.cuisine_ids).await? {
        return Err(AppError::new(ErrorCode::CuisineUnknown).into());
    }
    Ok(())
}
