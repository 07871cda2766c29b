//! Great-circle distance on a spherical Earth.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
//! c = 2 · atan2(√a, √(1−a))
//! d = R · c
//! ```
//!
//! with φ latitude, λ longitude (radians) and R = 6 371 000 m.

use crate::models::Location;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6371e3;

fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Haversine distance between two locations, in meters.
///
/// Pure and symmetric: `haversine(a, b) == haversine(b, a)`.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::distance::haversine;
///
/// let a = Location::new(0.0, 0.0);
/// let b = Location::new(0.0, 1.0);
/// // One degree of arc along the equator is about 111.19 km.
/// assert!((haversine(a, b) - 111_194.93).abs() < 0.01);
/// assert_eq!(haversine(a, a), 0.0);
/// ```
pub fn haversine(from: Location, to: Location) -> f64 {
    let lat1 = to_radians(from.lat());
    let lat2 = to_radians(to.lat());
    let delta_lat = to_radians(to.lat() - from.lat());
    let delta_lng = to_radians(to.lng() - from.lng());

    let a = (delta_lat / 2.0).sin() * (delta_lat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin() * (delta_lng / 2.0).sin();

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}
