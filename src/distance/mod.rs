//! Distance computation.
//!
//! - [`haversine()`]: great-circle distance between two locations
//! - [`total_distance`]: length of a route over consecutive pairs
//! - [`DistanceMatrix`]: precomputed pairwise distances for the metaheuristics

mod haversine;
mod matrix;
mod metrics;

pub use haversine::{haversine, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
pub use metrics::total_distance;
