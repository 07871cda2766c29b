//! Genetic algorithm over index permutations.
//!
//! - [`Tour`]: permutation chromosome with its open-path length
//! - [`GeneticConfig`]: population, mutation and generation parameters
//! - [`mating_pool`]: fitness-proportionate selection pool
//! - [`operators`]: order crossover and swap mutation
//! - [`GeneticRunner`]: the evolutionary loop

mod chromosome;
mod config;
pub mod operators;
mod runner;
mod selection;

pub use chromosome::Tour;
pub use config::GeneticConfig;
pub use runner::{GeneticResult, GeneticRunner};
pub use selection::{mating_pool, SHARE_TOLERANCE};
