//! API routes for catalog-server
//!
//! Each view of the operator console maps to a handler group:
//! search/browse (`restaurants`), manage (`manage`), reviews (`reviews`),
//! map (`map`), plus the reference-data lookups that back the forms.

pub mod health;
pub mod manage;
pub mod map;
pub mod reference;
pub mod restaurants;
pub mod reviews;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shared::error::{AppError, AppResult};

use crate::error::ServiceError;
use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/restaurants",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route("/api/restaurants/archive", post(manage::archive_restaurants))
        .route("/api/restaurants/restore", post(manage::restore_restaurants))
        .route("/api/restaurants/delete", post(manage::delete_restaurants))
        .route("/api/restaurants/purge/preview", get(manage::purge_preview))
        .route("/api/restaurants/purge", post(manage::purge_by_cuisine))
        .route(
            "/api/restaurants/{id}",
            get(restaurants::get_restaurant).put(restaurants::update_restaurant),
        )
        .route("/api/restaurants/{id}/reviews", get(reviews::list_reviews))
        .route("/api/reviews", post(reviews::create_review))
        .route("/api/reviews/delete", post(reviews::delete_reviews))
        .route("/api/price-ranges", get(reference::list_price_ranges))
        .route("/api/cuisines", get(reference::list_cuisines))
        .route("/api/map", get(map::map_view))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler result: JSON payload on success, enveloped error on failure.
/// `ServiceError` lets handlers use `?` on both DB calls and business checks.
pub(crate) type ApiResult<T> = Result<Json<T>, ServiceError>;

/// Batch id selection shared by archive/restore/delete endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct BatchIds {
    pub ids: Vec<i64>,
}

impl BatchIds {
    /// An empty selection is a client mistake, not a no-op.
    pub fn validate(&self) -> AppResult<()> {
        if self.ids.is_empty() {
            return Err(AppError::invalid_request("no ids selected"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_rejected() {
        assert!(BatchIds { ids: vec![] }.validate().is_err());
        assert!(BatchIds { ids: vec![1] }.validate().is_ok());
    }
}
