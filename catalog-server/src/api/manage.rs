//! Archive/restore and hard-delete handlers
//!
//! Destructive operations carry behavioral guardrails: explicit selection
//! deletes need an acknowledgment flag; the criteria-based purge additionally
//! needs the typed confirmation token derived from the current match count.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use shared::error::{AppError, ErrorCode};
use shared::models::{RestaurantFilter, RestaurantListing, Scope};
use shared::util::{confirmation_matches, confirmation_token};

use super::{ApiResult, BatchIds};
use crate::db::restaurants;
use crate::error::ServiceResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub affected: u64,
}

/// Criteria for the bulk purge: all restaurants assigned the given cuisine,
/// regardless of active flag.
#[derive(Debug, Deserialize)]
pub struct PurgeCriteria {
    pub cuisine: String,
}

#[derive(Debug, Serialize)]
pub struct PurgePreview {
    pub count: usize,
    pub restaurants: Vec<RestaurantListing>,
}

#[derive(Debug, Deserialize)]
pub struct PurgeRequest {
    pub cuisine: String,
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default)]
    pub confirm_text: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<i64>,
    #[serde(default)]
    pub acknowledged: bool,
}

pub async fn archive_restaurants(
    State(state): State<AppState>,
    Json(batch): Json<BatchIds>,
) -> ApiResult<BatchResult> {
    batch.validate()?;
    let affected = restaurants::set_active(&state.pool, &batch.ids, false).await?;
    tracing::info!(affected, "Restaurants archived");
    Ok(Json(BatchResult { affected }))
}

pub async fn restore_restaurants(
    State(state): State<AppState>,
    Json(batch): Json<BatchIds>,
) -> ApiResult<BatchResult> {
    batch.validate()?;
    let affected = restaurants::set_active(&state.pool, &batch.ids, true).await?;
    tracing::info!(affected, "Restaurants restored");
    Ok(Json(BatchResult { affected }))
}

/// Hard delete by explicit selection. Requires the acknowledgment flag only.
pub async fn delete_restaurants(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> ApiResult<BatchResult> {
    if !req.acknowledged {
        return Err(AppError::new(ErrorCode::AcknowledgmentRequired).into());
    }
    let batch = BatchIds { ids: req.ids };
    batch.validate()?;

    let affected = restaurants::hard_delete(&state.pool, &batch.ids).await?;
    tracing::info!(affected, "Restaurants hard-deleted");
    Ok(Json(BatchResult { affected }))
}

/// Preview the rows a criteria-based purge would remove.
pub async fn purge_preview(
    State(state): State<AppState>,
    Query(criteria): Query<PurgeCriteria>,
) -> ApiResult<PurgePreview> {
    let matched = matching_restaurants(&state, &criteria.cuisine).await?;
    Ok(Json(PurgePreview {
        count: matched.len(),
        restaurants: matched,
    }))
}

/// Criteria-based hard delete, gated on the acknowledgment flag and the
/// typed confirmation token ("DELETE {n}" for the current match count).
/// A stale preview count therefore fails the token check and nothing is
/// written.
pub async fn purge_by_cuisine(
    State(state): State<AppState>,
    Json(req): Json<PurgeRequest>,
) -> ApiResult<BatchResult> {
    if !req.acknowledged {
        return Err(AppError::new(ErrorCode::AcknowledgmentRequired).into());
    }

    let matched = matching_restaurants(&state, &req.cuisine).await?;
    if !confirmation_matches(matched.len(), &req.confirm_text) {
        return Err(AppError::new(ErrorCode::ConfirmationMismatch)
            .with_detail("expected", confirmation_token(matched.len()))
            .into());
    }
    if matched.is_empty() {
        return Ok(Json(BatchResult { affected: 0 }));
    }

    let ids: Vec<i64> = matched.iter().map(|r| r.restaurant_id).collect();
    let affected = restaurants::hard_delete(&state.pool, &ids).await?;
    tracing::info!(affected, cuisine = %req.cuisine, "Restaurants purged by cuisine");
    Ok(Json(BatchResult { affected }))
}

/// All restaurants (any scope) whose cuisine set contains the given cuisine.
/// Reuses the same intersection semantics as the search filter.
async fn matching_restaurants(
    state: &AppState,
    cuisine: &str,
) -> ServiceResult<Vec<RestaurantListing>> {
    let cuisine = cuisine.trim();
    if cuisine.is_empty() {
        return Err(AppError::required_field("cuisine").into());
    }
    let filter = RestaurantFilter {
        cuisines: vec![cuisine.to_string()],
        ..Default::default()
    };
    let rows = restaurants::list(&state.pool, Scope::All).await?;
    Ok(rows.into_iter().filter(|r| filter.matches(r)).collect())
}
