//! Route length aggregation.

use super::haversine;
use crate::models::Location;

/// Total length of a route in meters: the sum of haversine distances over
/// consecutive pairs.
///
/// No wraparound edge is added; a closed route includes its return leg
/// because the last element repeats the first.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::distance::{haversine, total_distance};
///
/// let a = Location::new(0.0, 0.0);
/// let b = Location::new(0.0, 1.0);
/// assert_eq!(total_distance(&[]), 0.0);
/// assert_eq!(total_distance(&[a]), 0.0);
/// assert_eq!(total_distance(&[a, b]), haversine(a, b));
/// ```
pub fn total_distance(route: &[Location]) -> f64 {
    route
        .windows(2)
        .map(|pair| haversine(pair[0], pair[1]))
        .sum()
}
