//! Nearest-neighbour tour construction.
//!
//! Starts at the first input location and repeatedly moves to the closest
//! unvisited location, then returns to the start.
//!
//! # Complexity
//!
//! O(n²) distance evaluations.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::haversine;
use crate::models::{Location, Route};

/// Builds a closed tour with the nearest-neighbour heuristic.
///
/// Ties are broken in favour of the location that appears first in the
/// input. Empty input yields an empty route; a single location yields
/// `[P, P]`.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::constructive::nearest_neighbour;
///
/// let a = Location::new(0.0, 0.0);
/// let b = Location::new(0.0, 1.0);
/// let c = Location::new(1.0, 1.0);
/// let d = Location::new(1.0, 0.0);
///
/// let route = nearest_neighbour(&[a, b, c, d]);
/// assert_eq!(route.as_slice(), &[a, b, c, d, a]);
/// ```
pub fn nearest_neighbour(locations: &[Location]) -> Route {
    let mut calls = 0;
    build_tour(locations, &mut calls)
}

/// Shared construction loop; `calls` is incremented once per distance
/// evaluation.
pub(super) fn build_tour(locations: &[Location], calls: &mut u64) -> Route {
    let Some((&start, rest)) = locations.split_first() else {
        return Route::empty();
    };

    let mut unvisited = rest.to_vec();
    let mut tour = Vec::with_capacity(locations.len() + 1);
    tour.push(start);
    let mut current = start;

    while !unvisited.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_dist = f64::INFINITY;
        for (idx, &candidate) in unvisited.iter().enumerate() {
            let d = haversine(current, candidate);
            *calls += 1;
            if idx == 0 || d < nearest_dist {
                nearest_idx = idx;
                nearest_dist = d;
            }
        }
        current = unvisited.remove(nearest_idx);
        tour.push(current);
    }

    tour.push(start);
    Route::new(tour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Location; 4] {
        [
            Location::new(0.0, 0.0),
            Location::new(0.0, 1.0),
            Location::new(1.0, 1.0),
            Location::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_nn_unit_square() {
        let [a, b, c, d] = square();
        let route = nearest_neighbour(&[a, b, c, d]);
        assert_eq!(route.as_slice(), &[a, b, c, d, a]);
    }

    #[test]
    fn test_nn_ignores_input_order_after_start() {
        let [a, b, c, d] = square();
        // From A, B and D tie; D is seen first here so it wins.
        let route = nearest_neighbour(&[a, d, c, b]);
        assert_eq!(route.as_slice(), &[a, d, c, b, a]);
    }

    #[test]
    fn test_nn_empty() {
        assert!(nearest_neighbour(&[]).is_empty());
    }

    #[test]
    fn test_nn_single_location() {
        let p = Location::new(10.0, 20.0);
        let route = nearest_neighbour(&[p]);
        assert_eq!(route.as_slice(), &[p, p]);
        assert_eq!(route.total_distance(), 0.0);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let start = Location::new(0.0, 0.0);
        let far = Location::new(0.0, 10.0);
        let near = Location::new(0.0, 1.0);
        let route = nearest_neighbour(&[start, far, near]);
        assert_eq!(route.as_slice(), &[start, near, far, start]);
    }

    #[test]
    fn test_nn_does_not_mutate_input() {
        let input = square();
        let copy = input;
        let _ = nearest_neighbour(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_build_tour_counts_calls() {
        let mut calls = 0;
        let _ = build_tour(&square(), &mut calls);
        // 3 + 2 + 1 candidates scanned.
        assert_eq!(calls, 6);
    }
}
