//! Geographic location type.

use serde::{Deserialize, Serialize};

/// A point on Earth's surface given as latitude and longitude in degrees.
///
/// Equality is by coordinate value, so two locations with the same
/// coordinates compare equal regardless of where they came from.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
///
/// let berlin = Location::new(52.52, 13.405);
/// assert_eq!(berlin.lat(), 52.52);
/// assert_eq!(berlin.lng(), 13.405);
/// assert!(berlin.is_valid());
/// assert!(!Location::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    lat: f64,
    lng: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns `true` if both coordinates are finite and in range.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Arithmetic mean of the given locations' coordinates.
    ///
    /// Returns `None` for an empty slice.
    pub fn centroid(locations: &[Location]) -> Option<Location> {
        if locations.is_empty() {
            return None;
        }
        let n = locations.len() as f64;
        let (lat_sum, lng_sum) = locations
            .iter()
            .fold((0.0, 0.0), |(lat, lng), loc| (lat + loc.lat, lng + loc.lng));
        Some(Location::new(lat_sum / n, lng_sum / n))
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<[f64; 2]> for Location {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}
