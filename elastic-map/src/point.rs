//! Point types for the two coordinate domains: the sphere and the map plane.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Point on the projected map plane. Coordinates are in the map's linear
/// units (kilometers for the standard Elastic definitions).
pub type PlanarPoint = Point2<f64>;

/// 2d point on the surface of the globe.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a new point from latitude and longitude values (in degrees).
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a new point, clamping the input to the valid latitude
    /// ([-90°, 90°]) and longitude ([-180°, 180°]) ranges.
    pub fn clamped(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: lon.clamp(-180.0, 180.0),
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Creates a new [`GeoPoint2d`] from latitude and longitude values (in degrees).
///
/// ```
/// use elastic_map::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::GeoPoint2d::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_limits_coordinates() {
        let point = GeoPoint2d::clamped(93.5, -181.0);
        assert_eq!(point.lat(), 90.0);
        assert_eq!(point.lon(), -180.0);

        let point = GeoPoint2d::clamped(-45.0, 60.0);
        assert_eq!(point, GeoPoint2d::latlon(-45.0, 60.0));
    }
}
