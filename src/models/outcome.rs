//! Solve outcomes, termination reasons and iteration snapshots.

use serde::{Deserialize, Serialize};

use super::Route;

/// Why a solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// The algorithm ran to its natural end (converged or exhausted its budget).
    Completed,
    /// Fewer than two locations were given; the degenerate route was returned.
    TooFewLocations,
    /// Genetic selection produced an empty mating pool; the best route so far
    /// was returned.
    MatingPoolExhausted,
    /// The cancel flag was raised; the best route so far was returned.
    Cancelled,
}

/// A snapshot of a 2-opt route and its length, recorded for visualization.
///
/// Records are observational only and never influence the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Route at the time of the snapshot (open, without closing duplicate).
    pub route: Route,
    /// Total distance of `route` in meters.
    pub distance: f64,
}

/// Result of solving through [`Strategy`](crate::solver::Strategy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutcome {
    /// The closed tour.
    pub route: Route,
    /// Total distance of `route` in meters.
    pub distance: f64,
    /// Why the solver stopped.
    pub termination: Termination,
    /// 2-opt iteration trace; empty for every other strategy.
    pub iterations: Vec<IterationRecord>,
}

impl SolveOutcome {
    /// Builds an outcome, computing the route's distance.
    pub fn new(route: Route, termination: Termination) -> Self {
        Self {
            distance: route.total_distance(),
            route,
            termination,
            iterations: Vec::new(),
        }
    }

    /// Attaches an iteration trace.
    pub fn with_iterations(mut self, iterations: Vec<IterationRecord>) -> Self {
        self.iterations = iterations;
        self
    }
}
