//! Review handlers: list per restaurant, add, batch delete

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use shared::error::{AppError, ErrorCode};
use shared::models::{Review, ReviewCreate};

use super::{ApiResult, BatchIds};
use crate::db::{restaurants, reviews};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub affected: u64,
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> ApiResult<Vec<Review>> {
    if !restaurants::exists(&state.pool, restaurant_id).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
    }
    let rows = reviews::list_for_restaurant(&state.pool, restaurant_id).await?;
    Ok(Json(rows))
}

pub async fn create_review(
    State(state): State<AppState>,
    Json(data): Json<ReviewCreate>,
) -> ApiResult<Review> {
    data.validate()?;
    if !restaurants::exists(&state.pool, data.restaurant_id).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
    }

    let review = reviews::create(&state.pool, &data).await?;
    tracing::info!(
        review_id = review.review_id,
        restaurant_id = review.restaurant_id,
        "Review created"
    );
    Ok(Json(review))
}

pub async fn delete_reviews(
    State(state): State<AppState>,
    Json(batch): Json<BatchIds>,
) -> ApiResult<BatchResult> {
    batch.validate()?;
    let affected = reviews::delete(&state.pool, &batch.ids).await?;
    tracing::info!(affected, "Reviews deleted");
    Ok(Json(BatchResult { affected }))
}
