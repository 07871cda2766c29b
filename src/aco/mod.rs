//! Ant colony optimization over haversine distances.
//!
//! - [`AntColonyConfig`]: colony size, iteration count and trail parameters
//! - [`AntColonyRunner`]: pheromone-guided tour construction loop

mod colony;
mod config;

pub use colony::{AntColonyResult, AntColonyRunner};
pub use config::AntColonyConfig;
