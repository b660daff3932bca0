//! Reference data lookups backing the add/update forms

use axum::Json;
use axum::extract::State;

use shared::models::{CuisineType, PriceRange};

use super::ApiResult;
use crate::db::reference;
use crate::state::AppState;

pub async fn list_price_ranges(State(state): State<AppState>) -> ApiResult<Vec<PriceRange>> {
    let rows = reference::list_price_ranges(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn list_cuisines(State(state): State<AppState>) -> ApiResult<Vec<CuisineType>> {
    let rows = reference::list_cuisines(&state.pool).await?;
    Ok(Json(rows))
}
