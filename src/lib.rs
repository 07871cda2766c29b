//! # geo-tour
//!
//! Travelling-salesperson heuristics over geographic coordinates. Every
//! solver takes an unordered set of latitude/longitude points and returns a
//! closed tour measured with the haversine great-circle distance.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Location, Route, SolveOutcome, Termination)
//! - [`distance`]: Haversine distance, route length and distance matrix
//! - [`constructive`]: Nearest-neighbour and instrumented greedy construction
//! - [`local_search`]: First-improvement 2-opt with iteration recording
//! - [`ga`]: Genetic algorithm over index permutations
//! - [`aco`]: Ant colony optimization
//! - [`solver`]: The closed [`Strategy`](solver::Strategy) enum dispatching to every solver
//! - [`error`]: Error type shared by all fallible operations
//! - [`random`]: Seeded RNG construction
//!
//! ## Example
//!
//! ```
//! use geo_tour::models::Location;
//! use geo_tour::solver::Strategy;
//! use geo_tour::local_search::TwoOptConfig;
//!
//! let stops = vec![
//!     Location::new(0.0, 0.0),
//!     Location::new(1.0, 1.0),
//!     Location::new(0.0, 1.0),
//!     Location::new(1.0, 0.0),
//! ];
//!
//! let outcome = Strategy::TwoOpt(TwoOptConfig::default()).solve(&stops).unwrap();
//! assert!(outcome.route.is_closed());
//! assert_eq!(outcome.route.len(), 5);
//! ```

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod random;
pub mod solver;
mod timing;

#[cfg(feature = "wasm")]
pub mod wasm;
