//! Genetic algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Configuration for the genetic tour solver.
///
/// # Defaults
///
/// ```
/// use geo_tour::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.mutation_rate, 0.01);
/// assert_eq!(config.generations, 100);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use geo_tour::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(200)
///     .with_generations(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneticConfig {
    /// Number of tours in every generation. Must be at least 2.
    pub population_size: usize,

    /// Per-position probability of a swap during mutation, in `[0, 1]`.
    pub mutation_rate: f64,

    /// Number of generations to evolve.
    ///
    /// Zero returns the best tour of the initial random population.
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            generations: 100,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// The value is not clamped; [`validate`](Self::validate) rejects values
    /// outside `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`TspError::InvalidConfiguration`] if the population is too
    /// small for selection and crossover, or the mutation rate is not a
    /// probability.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TspError::InvalidConfiguration(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneticConfig::default();
        assert_eq!(config.population_size, 100);
        assert!((config.mutation_rate - 0.01).abs() < 1e-15);
        assert_eq!(config.generations, 100);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneticConfig::default()
            .with_population_size(20)
            .with_mutation_rate(0.05)
            .with_generations(500)
            .with_seed(7);
        assert_eq!(config.population_size, 20);
        assert!((config.mutation_rate - 0.05).abs() < 1e-15);
        assert_eq!(config.generations, 500);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let config = GeneticConfig::default().with_population_size(n);
            assert!(matches!(
                config.validate(),
                Err(TspError::InvalidConfiguration(_))
            ));
        }
        assert!(GeneticConfig::default()
            .with_population_size(2)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_mutation_rate_range() {
        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = GeneticConfig::default().with_mutation_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} accepted");
        }
        for rate in [0.0, 1.0] {
            let config = GeneticConfig::default().with_mutation_rate(rate);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_zero_generations_is_valid() {
        assert!(GeneticConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: GeneticConfig =
            serde_json::from_str(r#"{"populationSize": 50, "seed": 3}"#).expect("valid json");
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.generations, 100);
    }
}
