//! Ant System tour construction.
//!
//! # Algorithm
//!
//! 1. Lay `initial_pheromone` on every edge
//! 2. Each ant starts at the first input location and repeatedly moves to
//!    an unvisited location `j` with probability ∝ τ(i,j)^α · η(i,j)^β,
//!    where η = 1 / max(d, `min_edge`)
//! 3. Evaporate every trail: τ ← (1 − ρ)·τ
//! 4. Every ant lays `deposit / L` on each edge of its closed tour
//! 5. Repeat, keeping the shortest closed tour ever built
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;

use super::config::AntColonyConfig;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Location, Route, Termination};
use crate::random::rng_from_seed;

/// Result of an ant colony run.
#[derive(Debug, Clone, PartialEq)]
pub struct AntColonyResult {
    /// Best tour found, closed and starting at the first input location.
    pub route: Route,

    /// Number of iterations fully completed.
    pub iterations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best closed-tour distance after each iteration.
    ///
    /// Index 0 is the input order. The sequence never increases.
    pub history: Vec<f64>,
}

impl AntColonyResult {
    /// Total distance of the closed tour in meters.
    pub fn distance(&self) -> f64 {
        self.route.total_distance()
    }
}

/// Symmetric pheromone levels over all location pairs.
struct Trails {
    levels: Vec<f64>,
    size: usize,
}

impl Trails {
    fn new(size: usize, initial: f64) -> Self {
        Self {
            levels: vec![initial; size * size],
            size,
        }
    }

    fn get(&self, from: usize, to: usize) -> f64 {
        self.levels[from * self.size + to]
    }

    fn evaporate(&mut self, rho: f64) {
        for level in &mut self.levels {
            *level *= 1.0 - rho;
        }
    }

    fn reinforce(&mut self, from: usize, to: usize, amount: f64) {
        self.levels[from * self.size + to] += amount;
        self.levels[to * self.size + from] += amount;
    }
}

/// Executes the ant colony tour search.
///
/// # Usage
///
/// ```
/// use geo_tour::aco::{AntColonyConfig, AntColonyRunner};
/// use geo_tour::models::Location;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 1.0),
///     Location::new(1.0, 1.0),
///     Location::new(1.0, 0.0),
/// ];
/// let config = AntColonyConfig::new(10, 20)
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_evaporation(0.5)
///     .with_deposit(1.0)
///     .with_initial_pheromone(1.0)
///     .with_min_edge(1.0)
///     .with_seed(42);
///
/// let result = AntColonyRunner::run(&locations, &config).unwrap();
/// assert_eq!(result.route.len(), 5);
/// assert_eq!(result.route.start(), Some(locations[0]));
/// ```
pub struct AntColonyRunner;

impl AntColonyRunner {
    /// Runs the colony with the configured seed.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfiguration`](crate::error::TspError::InvalidConfiguration)
    /// if `config` fails validation.
    pub fn run(locations: &[Location], config: &AntColonyConfig) -> Result<AntColonyResult> {
        Self::run_with_cancel(locations, config, None)
    }

    /// Runs the colony with an optional cancellation flag, checked before
    /// every iteration.
    pub fn run_with_cancel(
        locations: &[Location],
        config: &AntColonyConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AntColonyResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(locations, config, &mut rng, cancel)
    }

    /// Runs the colony drawing from the supplied RNG. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        locations: &[Location],
        config: &AntColonyConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AntColonyResult> {
        config.validate()?;

        let n = locations.len();
        if n < 2 {
            return Ok(AntColonyResult {
                route: Route::round_trip(locations.to_vec()),
                iterations: 0,
                termination: Termination::TooFewLocations,
                history: Vec::new(),
            });
        }

        let distances = DistanceMatrix::from_locations(locations);
        let visibility: Vec<f64> = (0..n * n)
            .map(|idx| 1.0 / distances.get(idx / n, idx % n).max(config.min_edge))
            .collect();
        let mut trails = Trails::new(n, config.initial_pheromone);

        let mut best: Vec<usize> = (0..n).collect();
        let mut best_distance = distances.closed_tour_distance(&best);
        let mut history = Vec::with_capacity(config.iterations + 1);
        history.push(best_distance);

        let mut termination = Termination::Completed;
        let mut iterations = 0;

        for iteration in 0..config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }

            let tours: Vec<(Vec<usize>, f64)> = (0..config.ants)
                .map(|_| {
                    let tour = construct_tour(&trails, &visibility, config, rng);
                    let length = distances.closed_tour_distance(&tour);
                    (tour, length)
                })
                .collect();

            trails.evaporate(config.evaporation);
            for (tour, length) in &tours {
                if *length <= 0.0 {
                    continue;
                }
                let amount = config.deposit / length;
                for pair in tour.windows(2) {
                    trails.reinforce(pair[0], pair[1], amount);
                }
                trails.reinforce(tour[n - 1], tour[0], amount);

                if *length < best_distance {
                    best_distance = *length;
                    best.clone_from(tour);
                }
            }

            history.push(best_distance);
            iterations += 1;
            trace!("iteration {}: best {:.1} m", iteration + 1, best_distance);
        }

        debug!(
            "ant colony: {} iterations, {} ants, best {:.1} m",
            iterations, config.ants, best_distance
        );

        let route = Route::round_trip(best.iter().map(|&i| locations[i]).collect());

        Ok(AntColonyResult {
            route,
            iterations,
            termination,
            history,
        })
    }
}

/// Builds one ant's tour, starting at index 0.
fn construct_tour<R: Rng>(
    trails: &Trails,
    visibility: &[f64],
    config: &AntColonyConfig,
    rng: &mut R,
) -> Vec<usize> {
    let n = trails.size;
    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    tour.push(0);
    visited[0] = true;

    let mut current = 0;
    while tour.len() < n {
        let next = select_next(current, &visited, trails, visibility, config, rng);
        tour.push(next);
        visited[next] = true;
        current = next;
    }
    tour
}

/// Roulette-wheel choice over unvisited locations weighted by τ^α · η^β.
///
/// Falls back to the first unvisited location when the weights do not
/// form a usable distribution.
fn select_next<R: Rng>(
    current: usize,
    visited: &[bool],
    trails: &Trails,
    visibility: &[f64],
    config: &AntColonyConfig,
    rng: &mut R,
) -> usize {
    let n = visited.len();
    let first_unvisited = visited.iter().position(|&v| !v).unwrap_or(0);

    let weights: Vec<f64> = (0..n)
        .map(|j| {
            if visited[j] {
                0.0
            } else {
                trails.get(current, j).powf(config.alpha)
                    * visibility[current * n + j].powf(config.beta)
            }
        })
        .collect();
    let total: f64 = weights.iter().sum();

    if !(total > 0.0 && total.is_finite()) {
        return first_unvisited;
    }

    let r = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (j, &w) in weights.iter().enumerate() {
        if visited[j] {
            continue;
        }
        cumulative += w;
        if cumulative >= r {
            return j;
        }
    }

    // Rounding left r just above the final cumulative weight.
    (0..n).rev().find(|&j| !visited[j]).unwrap_or(first_unvisited)
}
