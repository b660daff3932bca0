//! Map projection helpers
//!
//! Plain arithmetic only: the initial map center is the mean of the marker
//! coordinates, and marker colors come from a fixed price-symbol lookup.

use serde::{Deserialize, Serialize};

/// Fallback marker color for restaurants with no (or an unmapped) price symbol
pub const DEFAULT_MARKER_COLOR: &str = "gray";

/// A point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Arithmetic mean of the given coordinates; `None` when there are none.
pub fn map_center(points: &[MapPoint]) -> Option<MapPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(la, lo), p| (la + p.latitude, lo + p.longitude));
    Some(MapPoint {
        latitude: lat_sum / n,
        longitude: lng_sum / n,
    })
}

/// Marker color for a price symbol (fixed four-entry lookup).
pub fn marker_color(price_symbol: Option<&str>) -> &'static str {
    match price_symbol {
        Some("$") => "green",
        Some("$$") => "blue",
        Some("$$$") => "orange",
        Some("$$$$") => "red",
        _ => DEFAULT_MARKER_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_the_mean() {
        let points = [
            MapPoint {
                latitude: 32.0,
                longitude: -96.0,
            },
            MapPoint {
                latitude: 34.0,
                longitude: -98.0,
            },
        ];
        let center = map_center(&points).unwrap();
        assert!((center.latitude - 33.0).abs() < 1e-9);
        assert!((center.longitude - -97.0).abs() < 1e-9);
    }

    #[test]
    fn no_points_means_no_center() {
        assert_eq!(map_center(&[]), None);
    }

    #[test]
    fn single_point_is_its_own_center() {
        let p = MapPoint {
            latitude: 32.78,
            longitude: -96.8,
        };
        assert_eq!(map_center(&[p]), Some(p));
    }

    #[test]
    fn colors_follow_the_price_lookup() {
        assert_eq!(marker_color(Some("$")), "green");
        assert_eq!(marker_color(Some("$$")), "blue");
        assert_eq!(marker_color(Some("$$$")), "orange");
        assert_eq!(marker_color(Some("$$$$")), "red");
    }

    #[test]
    fn unmapped_symbols_fall_back_to_default() {
        assert_eq!(marker_color(None), DEFAULT_MARKER_COLOR);
        assert_eq!(marker_color(Some("$$$$$")), DEFAULT_MARKER_COLOR);
        assert_eq!(marker_color(Some("cheap")), DEFAULT_MARKER_COLOR);
    }
}
