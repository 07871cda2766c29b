//! Genetic evolutionary loop.
//!
//! [`GeneticRunner`] orchestrates the complete process:
//! random population → mating pool → crossover → mutation → repeat,
//! keeping the shortest tour ever seen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::chromosome::Tour;
use super::config::GeneticConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::mating_pool;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Location, Route, Termination};
use crate::random::rng_from_seed;

/// Result of a genetic run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticResult {
    /// Best tour found, closed.
    pub route: Route,

    /// Number of generations fully evolved.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best open-path distance after each generation.
    ///
    /// Index 0 is the initial population. The sequence never increases.
    pub history: Vec<f64>,
}

impl GeneticResult {
    /// Total distance of the closed tour in meters.
    pub fn distance(&self) -> f64 {
        self.route.total_distance()
    }
}

/// Executes the genetic tour search.
///
/// # Usage
///
/// ```
/// use geo_tour::models::{Location, Termination};
/// use geo_tour::ga::{GeneticConfig, GeneticRunner};
///
/// let locations: Vec<Location> = (0..6)
///     .map(|i| Location::new((i % 2) as f64, (i / 2) as f64))
///     .collect();
/// let config = GeneticConfig::default().with_generations(20).with_seed(42);
///
/// let result = GeneticRunner::run(&locations, &config).unwrap();
/// assert_eq!(result.route.len(), 7);
/// assert!(result.route.is_closed());
/// assert_eq!(result.termination, Termination::Completed);
/// ```
pub struct GeneticRunner;

impl GeneticRunner {
    /// Runs the genetic search with the configured seed.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfiguration`](crate::error::TspError::InvalidConfiguration)
    /// if `config` fails validation.
    pub fn run(locations: &[Location], config: &GeneticConfig) -> Result<GeneticResult> {
        Self::run_with_cancel(locations, config, None)
    }

    /// Runs the genetic search with an optional cancellation flag.
    ///
    /// The flag is checked before every generation. When set, the best tour
    /// found so far is returned with [`Termination::Cancelled`].
    pub fn run_with_cancel(
        locations: &[Location],
        config: &GeneticConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GeneticResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(locations, config, &mut rng, cancel)
    }

    /// Runs the genetic search drawing from the supplied RNG.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        locations: &[Location],
        config: &GeneticConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GeneticResult> {
        config.validate()?;

        if locations.len() < 2 {
            return Ok(GeneticResult {
                route: Route::round_trip(locations.to_vec()),
                generations: 0,
                termination: Termination::TooFewLocations,
                history: Vec::new(),
            });
        }

        let distances = DistanceMatrix::from_locations(locations);

        // 1. Random initial population
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| random_tour(locations.len(), &distances, rng))
            .collect();

        // 2. Track best
        let mut best = shortest(&population).clone();
        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(best.distance());

        let mut termination = Termination::Completed;
        let mut generations = 0;

        // 3. Evolutionary loop
        for generation in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }

            let pool = mating_pool(&population);
            if pool.is_empty() {
                warn!("mating pool is empty at generation {generation}; returning best tour so far");
                termination = Termination::MatingPoolExhausted;
                break;
            }

            population = (0..config.population_size)
                .map(|_| {
                    let p1 = &population[pool[rng.random_range(0..pool.len())]];
                    let p2 = &population[pool[rng.random_range(0..pool.len())]];
                    let mut child = order_crossover(p1.order(), p2.order(), rng);
                    swap_mutation(&mut child, config.mutation_rate, rng);
                    Tour::new(child, &distances)
                })
                .collect();

            let generation_best = shortest(&population);
            if generation_best.distance() < best.distance() {
                best = generation_best.clone();
            }

            history.push(best.distance());
            generations += 1;
            trace!("generation {}: best {:.1} m", generation + 1, best.distance());
        }

        let route = Route::round_trip(best.order().iter().map(|&i| locations[i]).collect());

        Ok(GeneticResult {
            route,
            generations,
            termination,
            history,
        })
    }
}

/// Creates a uniformly random permutation of `0..n`.
fn random_tour<R: Rng>(n: usize, distances: &DistanceMatrix, rng: &mut R) -> Tour {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    Tour::new(order, distances)
}

/// Returns the shortest tour, first on ties.
///
/// `population` must not be empty.
fn shortest(population: &[Tour]) -> &Tour {
    let mut best = &population[0];
    for tour in &population[1..] {
        if tour.distance() < best.distance() {
            best = tour;
        }
    }
    best
}
