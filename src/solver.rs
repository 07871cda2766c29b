//! Closed set of solving strategies.
//!
//! [`Strategy`] names every tour solver in the crate. Callers pick one, hand
//! it the locations, and get back a [`SolveOutcome`]. The enum serializes
//! with an `algorithm` tag so a front end can send it as JSON:
//!
//! ```json
//! { "algorithm": "genetic", "populationSize": 50, "generations": 200 }
//! ```

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::aco::{AntColonyConfig, AntColonyRunner};
use crate::constructive::{greedy, nearest_neighbour};
use crate::error::{Result, TspError};
use crate::ga::{GeneticConfig, GeneticRunner};
use crate::local_search::{two_opt_with_cancel, TwoOptConfig};
use crate::models::{Location, SolveOutcome, Termination};

/// A tour-construction strategy and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "camelCase")]
pub enum Strategy {
    /// Nearest-neighbour construction from the first location.
    NearestNeighbour,
    /// Nearest-neighbour construction with distance-call statistics logged.
    Greedy,
    /// 2-opt improvement of the input order.
    TwoOpt(TwoOptConfig),
    /// Genetic search over random permutations.
    Genetic(GeneticConfig),
    /// Ant colony construction with pheromone reinforcement.
    AntColony(AntColonyConfig),
}

impl Strategy {
    /// Solves `locations` with this strategy.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidConfiguration`] if the strategy parameters fail
    ///   validation; this is checked first
    /// - [`TspError::InvalidLocation`] for the first location with a
    ///   non-finite or out-of-range coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_tour::models::{Location, Termination};
    /// use geo_tour::solver::Strategy;
    ///
    /// let a = Location::new(0.0, 0.0);
    /// let b = Location::new(0.0, 1.0);
    /// let c = Location::new(0.0, 3.0);
    ///
    /// let outcome = Strategy::NearestNeighbour.solve(&[a, c, b]).unwrap();
    /// assert_eq!(outcome.route.as_slice(), &[a, b, c, a]);
    /// assert_eq!(outcome.termination, Termination::Completed);
    /// ```
    pub fn solve(&self, locations: &[Location]) -> Result<SolveOutcome> {
        self.solve_with_cancel(locations, None)
    }

    /// Solves with an optional cancellation flag.
    ///
    /// The flag is honoured by the iterative strategies (2-opt, genetic and
    /// ant colony); the constructive ones run to completion.
    pub fn solve_with_cancel(
        &self,
        locations: &[Location],
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveOutcome> {
        self.validate()?;
        validate_locations(locations)?;

        let outcome = match self {
            Strategy::NearestNeighbour => {
                SolveOutcome::new(nearest_neighbour(locations), Termination::Completed)
            }
            Strategy::Greedy => SolveOutcome::new(greedy(locations), Termination::Completed),
            Strategy::TwoOpt(config) => {
                let result = two_opt_with_cancel(locations, config, cancel);
                SolveOutcome::new(result.route, result.termination)
                    .with_iterations(result.iterations)
            }
            Strategy::Genetic(config) => {
                let result = GeneticRunner::run_with_cancel(locations, config, cancel)?;
                SolveOutcome::new(result.route, result.termination)
            }
            Strategy::AntColony(config) => {
                let result = AntColonyRunner::run_with_cancel(locations, config, cancel)?;
                SolveOutcome::new(result.route, result.termination)
            }
        };

        if locations.len() < 2 {
            return Ok(SolveOutcome {
                termination: Termination::TooFewLocations,
                ..outcome
            });
        }
        Ok(outcome)
    }

    /// Validates the strategy parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Strategy::NearestNeighbour | Strategy::Greedy | Strategy::TwoOpt(_) => Ok(()),
            Strategy::Genetic(config) => config.validate(),
            Strategy::AntColony(config) => config.validate(),
        }
    }

    /// Short name of the strategy, matching its serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::NearestNeighbour => "nearestNeighbour",
            Strategy::Greedy => "greedy",
            Strategy::TwoOpt(_) => "twoOpt",
            Strategy::Genetic(_) => "genetic",
            Strategy::AntColony(_) => "antColony",
        }
    }
}

fn validate_locations(locations: &[Location]) -> Result<()> {
    match locations.iter().position(|loc| !loc.is_valid()) {
        Some(index) => {
            let loc = locations[index];
            Err(TspError::InvalidLocation {
                index,
                lat: loc.lat(),
                lng: loc.lng(),
            })
        }
        None => Ok(()),
    }
}
