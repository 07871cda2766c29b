//! Instrumented nearest-neighbour construction.
//!
//! Produces exactly the tour of `nearest_neighbour`
//! while counting distance evaluations and measuring wall time.

use std::time::Duration;

use log::debug;

use super::nearest_neighbour::build_tour;
use crate::models::{Location, Route};
use crate::timing::Stopwatch;

/// Observability data from a greedy construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyStats {
    /// Number of haversine evaluations performed.
    pub distance_calculations: u64,
    /// Wall-clock time spent constructing the tour.
    pub elapsed: Duration,
    /// Number of input locations.
    pub nodes: usize,
}

/// Builds a closed nearest-neighbour tour and logs its statistics.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::constructive::{greedy, nearest_neighbour};
///
/// let locs = [
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 5.0),
///     Location::new(0.0, 1.0),
/// ];
/// assert_eq!(greedy(&locs), nearest_neighbour(&locs));
/// ```
pub fn greedy(locations: &[Location]) -> Route {
    greedy_with_stats(locations).0
}

/// Builds a closed nearest-neighbour tour, returning it with its statistics.
///
/// For n locations, exactly n(n-1)/2 distances are evaluated.
pub fn greedy_with_stats(locations: &[Location]) -> (Route, GreedyStats) {
    let started = Stopwatch::start();
    let mut calls = 0;
    let route = build_tour(locations, &mut calls);
    let stats = GreedyStats {
        distance_calculations: calls,
        elapsed: started.elapsed(),
        nodes: locations.len(),
    };

    debug!(
        "greedy: {} distance calculations, {:.2} ms, {} nodes",
        stats.distance_calculations,
        stats.elapsed.as_secs_f64() * 1000.0,
        stats.nodes
    );

    (route, stats)
}
