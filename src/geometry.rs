//! Coordinate handling: Web Mercator to WGS84 reprojection and map links.

use std::f64::consts::PI;

use serde_json::Value;

use crate::arcgis::Geometry;

/// Half the Web Mercator circumference, in meters.
const MERCATOR_HALF_CIRCUMFERENCE: f64 = 20_037_508.34;

/// Reproject a coordinate pair to geographic `(lat, lon)`.
///
/// Pairs already inside geographic bounds pass through unchanged (swapped to
/// lat-first); anything else is treated as EPSG:3857 meters.
pub fn to_geographic(x: f64, y: f64) -> (f64, f64) {
    if x.abs() <= 180.0 && y.abs() <= 90.0 {
        return (y, x);
    }

    let lon = (x / MERCATOR_HALF_CIRCUMFERENCE) * 180.0;
    let lat = (y / MERCATOR_HALF_CIRCUMFERENCE) * 180.0;
    let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
    (lat, lon)
}

/// Coerce a raw JSON coordinate into `f64`. ArcGIS sometimes serves
/// coordinates as strings; anything non-numeric counts as missing.
fn coerce_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Extract `(lat, lon)` from an optional feature geometry. Missing or
/// non-numeric coordinates yield `None`; downstream then omits the map link
/// and coordinate rows silently.
pub fn feature_coordinates(geometry: Option<&Geometry>) -> Option<(f64, f64)> {
    let geom = geometry?;
    let x = coerce_coordinate(&geom.x)?;
    let y = coerce_coordinate(&geom.y)?;
    Some(to_geographic(x, y))
}

/// Google Maps search link for a point.
pub fn maps_url(lat: f64, lon: f64) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={:.6},{:.6}",
        lat, lon
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geographic_pair_passes_through() {
        let (lat, lon) = to_geographic(8.5, 45.5);
        assert_eq!((lat, lon), (45.5, 8.5));
    }

    #[test]
    fn test_mercator_edge_reprojects_to_180() {
        let (lat, lon) = to_geographic(20_037_508.34, 0.0);
        assert!((lon - 180.0).abs() < 1e-6);
        assert!(lat.abs() < 1e-6);
    }

    #[test]
    fn test_mercator_milan_area() {
        // Roughly Milan in EPSG:3857.
        let (lat, lon) = to_geographic(1_020_000.0, 5_695_000.0);
        assert!((lon - 9.163).abs() < 0.01);
        assert!((lat - 45.465).abs() < 0.01);
    }

    #[test]
    fn test_string_coordinates_coerce() {
        let geom: Geometry =
            serde_json::from_value(json!({"x": "8.5", "y": "45.5"})).unwrap();
        assert_eq!(feature_coordinates(Some(&geom)), Some((45.5, 8.5)));
    }

    #[test]
    fn test_non_numeric_coordinates_are_missing() {
        let geom: Geometry =
            serde_json::from_value(json!({"x": "n/a", "y": 45.5})).unwrap();
        assert_eq!(feature_coordinates(Some(&geom)), None);
        assert_eq!(feature_coordinates(None), None);
    }

    #[test]
    fn test_maps_url_six_decimals() {
        assert_eq!(
            maps_url(45.5, 8.5),
            "https://www.google.com/maps/search/?api=1&query=45.500000,8.500000"
        );
    }
}
