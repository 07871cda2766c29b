//! Constructive heuristics for building tours from scratch.
//!
//! - [`nearest_neighbour()`]: Greedy nearest-neighbour tour, O(n²)
//! - [`greedy()`]: The same tour with distance-call counting and timing

mod greedy;
mod nearest_neighbour;

pub use greedy::{greedy, greedy_with_stats, GreedyStats};
pub use nearest_neighbour::nearest_neighbour;
