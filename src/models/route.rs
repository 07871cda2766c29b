//! Route type: an ordered sequence of locations.

use serde::{Deserialize, Serialize};

use super::Location;
use crate::distance::total_distance;

/// An ordered sequence of locations.
///
/// A route is *closed* when its last location equals its first, which
/// represents a tour returning to its origin. Solvers always return closed
/// routes for non-empty input.
///
/// # Examples
///
/// ```
/// use geo_tour::models::{Location, Route};
///
/// let a = Location::new(0.0, 0.0);
/// let b = Location::new(0.0, 1.0);
/// let route = Route::new(vec![a, b]);
/// assert!(!route.is_closed());
///
/// let closed = route.closed();
/// assert!(closed.is_closed());
/// assert_eq!(closed.as_slice(), &[a, b, a]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    locations: Vec<Location>,
}

impl Route {
    /// Creates a route from an ordered list of locations.
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Creates an empty route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the locations in visit order.
    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }

    /// Consumes the route, returning its locations.
    pub fn into_locations(self) -> Vec<Location> {
        self.locations
    }

    /// Number of entries, including any closing duplicate.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the route has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// First location of the route.
    pub fn start(&self) -> Option<Location> {
        self.locations.first().copied()
    }

    /// Returns `true` if the route has at least two entries and the last
    /// equals the first.
    pub fn is_closed(&self) -> bool {
        match (self.locations.first(), self.locations.last()) {
            (Some(first), Some(last)) => self.locations.len() >= 2 && first == last,
            _ => false,
        }
    }

    /// Builds a closed tour from an open visit order by always appending the
    /// first location.
    ///
    /// Unlike [`closed`](Self::closed), this does not compare coordinates, so
    /// an order whose last stop shares the start's coordinates still gets
    /// its closing duplicate. An empty order stays empty.
    pub fn round_trip(mut order: Vec<Location>) -> Self {
        if let Some(&first) = order.first() {
            order.push(first);
        }
        Self::new(order)
    }

    /// Returns this route with the start appended, unless already closed.
    ///
    /// Closure is judged by coordinates. An empty route stays empty.
    pub fn closed(mut self) -> Self {
        if let Some(first) = self.start() {
            if !self.is_closed() {
                self.locations.push(first);
            }
        }
        self
    }

    /// Total length in meters over consecutive pairs.
    pub fn total_distance(&self) -> f64 {
        total_distance(&self.locations)
    }
}

impl From<Vec<Location>> for Route {
    fn from(locations: Vec<Location>) -> Self {
        Self::new(locations)
    }
}
