//! 2-opt local search over a geographic tour.
//!
//! # Algorithm
//!
//! Starting from the input order, try every pair `1 ≤ i < k < n` and reverse
//! the segment `[i..=k]`. A reversal is accepted as soon as it makes the
//! route strictly shorter (first-improvement). A full pass with no accepted
//! reversal ends the search, after which the start is appended to close the
//! tour.
//!
//! The first location never moves, so the returned tour starts where the
//! input does. Lengths are compared by full recomputation of the open route.
//!
//! # Complexity
//!
//! O(n²) candidate reversals per pass, each O(n) to evaluate. Termination is
//! guaranteed because every accepted move strictly decreases the length.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance::total_distance;
use crate::models::{IterationRecord, Location, Route, Termination};
use crate::timing::Stopwatch;

/// Configuration for [`two_opt`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoOptConfig {
    /// Record an [`IterationRecord`] before every candidate comparison.
    ///
    /// Recording is O(n) per comparison and is meant for visualizing small
    /// inputs.
    pub record_iterations: bool,
}

impl TwoOptConfig {
    /// Enables or disables iteration recording.
    pub fn with_record_iterations(mut self, record: bool) -> Self {
        self.record_iterations = record;
        self
    }
}

/// Result of a 2-opt run.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptResult {
    /// The improved, closed tour.
    pub route: Route,
    /// Snapshots taken before each comparison (empty unless recording).
    pub iterations: Vec<IterationRecord>,
    /// Number of accepted reversals.
    pub swaps: usize,
    /// Number of full scanning passes performed.
    pub passes: usize,
    /// Why the search stopped.
    pub termination: Termination,
}

impl TwoOptResult {
    /// Total distance of the closed tour in meters.
    pub fn distance(&self) -> f64 {
        self.route.total_distance()
    }

    /// Index of the shortest recorded iteration, first on ties.
    pub fn fastest_iteration(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, record) in self.iterations.iter().enumerate() {
            match best {
                Some((_, d)) if record.distance >= d => {}
                _ => best = Some((idx, record.distance)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// Reverses `route[i..=k]`, returning a new route.
///
/// # Panics
///
/// Panics if `i > k` or `k >= route.len()`.
pub fn two_opt_swap(route: &[Location], i: usize, k: usize) -> Vec<Location> {
    let mut candidate = route.to_vec();
    candidate[i..=k].reverse();
    candidate
}

/// Improves the input order with 2-opt and returns the closed tour.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::local_search::{two_opt, TwoOptConfig};
///
/// // Four stops along the equator, visited out of order.
/// let p: Vec<Location> = (0..4).map(|i| Location::new(0.0, i as f64)).collect();
///
/// let result = two_opt(&[p[0], p[2], p[1], p[3]], &TwoOptConfig::default());
/// assert_eq!(result.route.as_slice(), &[p[0], p[1], p[2], p[3], p[0]]);
/// assert_eq!(result.swaps, 1);
/// ```
pub fn two_opt(locations: &[Location], config: &TwoOptConfig) -> TwoOptResult {
    two_opt_with_cancel(locations, config, None)
}

/// Runs 2-opt with an optional cancellation flag.
///
/// The flag is checked before each pass. When it is set, the best route so
/// far is closed and returned with [`Termination::Cancelled`].
pub fn two_opt_with_cancel(
    locations: &[Location],
    config: &TwoOptConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> TwoOptResult {
    if locations.len() < 2 {
        return TwoOptResult {
            route: Route::round_trip(locations.to_vec()),
            iterations: Vec::new(),
            swaps: 0,
            passes: 0,
            termination: Termination::TooFewLocations,
        };
    }

    let started = Stopwatch::start();
    let mut route = locations.to_vec();
    let mut current = total_distance(&route);
    let mut iterations = Vec::new();
    let mut swaps = 0;
    let mut passes = 0;
    let mut termination = Termination::Completed;
    let n = route.len();

    let mut improved = true;
    while improved {
        if let Some(ref flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                termination = Termination::Cancelled;
                break;
            }
        }

        improved = false;
        passes += 1;

        for i in 1..n - 1 {
            for k in i + 1..n {
                let candidate = two_opt_swap(&route, i, k);
                let candidate_dist = total_distance(&candidate);

                if config.record_iterations {
                    iterations.push(IterationRecord {
                        route: Route::new(route.clone()),
                        distance: current,
                    });
                }

                if candidate_dist < current {
                    route = candidate;
                    current = candidate_dist;
                    improved = true;
                    swaps += 1;
                }
            }
        }
    }

    debug!(
        "2-opt: {} swaps in {} passes, {:.2} ms, {} nodes",
        swaps,
        passes,
        started.elapsed().as_secs_f64() * 1000.0,
        n
    );

    TwoOptResult {
        route: Route::round_trip(route),
        iterations,
        swaps,
        passes,
        termination,
    }
}
