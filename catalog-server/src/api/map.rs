//! Map view handler
//!
//! Serves the active restaurants that have coordinates, with the mean
//! coordinate as the initial view center and a price-derived marker color.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use shared::geo::{MapPoint, map_center, marker_color};
use shared::models::Scope;

use super::ApiResult;
use crate::db::restaurants;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MapMarker {
    pub restaurant_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_symbol: Option<String>,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MapView {
    /// Absent when no active restaurant has coordinates
    pub center: Option<MapPoint>,
    pub markers: Vec<MapMarker>,
}

pub async fn map_view(State(state): State<AppState>) -> ApiResult<MapView> {
    let rows = restaurants::list(&state.pool, Scope::ActiveOnly).await?;

    let markers: Vec<MapMarker> = rows
        .into_iter()
        .filter_map(|r| {
            let (latitude, longitude) = r.latitude.zip(r.longitude)?;
            Some(MapMarker {
                color: marker_color(r.price_symbol.as_deref()),
                restaurant_id: r.restaurant_id,
                name: r.name,
                latitude,
                longitude,
                price_symbol: r.price_symbol,
            })
        })
        .collect();

    let points: Vec<MapPoint> = markers
        .iter()
        .map(|m| MapPoint {
            latitude: m.latitude,
            longitude: m.longitude,
        })
        .collect();

    Ok(Json(MapView {
        center: map_center(&points),
        markers,
    }))
}
