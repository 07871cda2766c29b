//! Ant colony configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Parameters of the ant colony tour solver.
///
/// There are no defaults; every numeric parameter is chosen by the caller.
///
/// # Examples
///
/// ```
/// use geo_tour::aco::AntColonyConfig;
///
/// let config = AntColonyConfig::new(20, 50)
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_evaporation(0.5)
///     .with_deposit(100.0)
///     .with_initial_pheromone(1.0)
///     .with_min_edge(1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntColonyConfig {
    /// Ants constructing a tour per iteration. Must be at least 1.
    pub ants: usize,

    /// Number of construct-and-update iterations.
    pub iterations: usize,

    /// Pheromone exponent (α).
    pub alpha: f64,

    /// Heuristic exponent (β) applied to `1 / distance`.
    pub beta: f64,

    /// Fraction of pheromone lost per iteration (ρ), in `[0, 1)`.
    pub evaporation: f64,

    /// Pheromone an ant lays per unit of inverse tour length (Q).
    pub deposit: f64,

    /// Pheromone level on every edge before the first iteration.
    pub initial_pheromone: f64,

    /// Floor in meters applied to edge lengths before taking visibility
    /// `1 / d`, so coincident points keep a finite weight.
    pub min_edge: f64,

    /// Random seed. `None` uses a random seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AntColonyConfig {
    /// Creates a configuration with the given colony size and iteration
    /// count. The remaining parameters start at zero and must be set.
    pub fn new(ants: usize, iterations: usize) -> Self {
        Self {
            ants,
            iterations,
            alpha: 0.0,
            beta: 0.0,
            evaporation: 0.0,
            deposit: 0.0,
            initial_pheromone: 0.0,
            min_edge: 0.0,
            seed: None,
        }
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    /// Sets the deposit constant.
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Sets the visibility distance floor in meters.
    pub fn with_min_edge(mut self, meters: f64) -> Self {
        self.min_edge = meters;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`TspError::InvalidConfiguration`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(invalid("ants must be at least 1".into()));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(invalid(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(invalid(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(invalid(format!(
                "evaporation must be within [0, 1), got {}",
                self.evaporation
            )));
        }
        if !(self.deposit.is_finite() && self.deposit > 0.0) {
            return Err(invalid(format!(
                "deposit must be finite and positive, got {}",
                self.deposit
            )));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(invalid(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            )));
        }
        if !(self.min_edge.is_finite() && self.min_edge > 0.0) {
            return Err(invalid(format!(
                "min_edge must be finite and positive, got {}",
                self.min_edge
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> TspError {
    TspError::InvalidConfiguration(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AntColonyConfig {
        AntColonyConfig::new(10, 20)
            .with_alpha(1.0)
            .with_beta(2.0)
            .with_evaporation(0.1)
            .with_deposit(1.0)
            .with_initial_pheromone(1.0)
            .with_min_edge(1.0)
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate().is_ok());
        assert!(valid().with_alpha(0.0).with_beta(0.0).validate().is_ok());
        assert!(valid().with_evaporation(0.0).validate().is_ok());
    }

    #[test]
    fn test_new_requires_remaining_parameters() {
        assert!(AntColonyConfig::new(10, 20).validate().is_err());
    }

    #[test]
    fn test_rejects_zero_ants() {
        let mut config = valid();
        config.ants = 0;
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_bad_exponents() {
        for v in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(valid().with_alpha(v).validate().is_err());
            assert!(valid().with_beta(v).validate().is_err());
        }
    }

    #[test]
    fn test_rejects_bad_evaporation() {
        for v in [-0.1, 1.0, 1.5, f64::NAN] {
            assert!(valid().with_evaporation(v).validate().is_err(), "{v}");
        }
    }

    #[test]
    fn test_rejects_non_positive_deposit_pheromone_and_min_edge() {
        for v in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(valid().with_deposit(v).validate().is_err());
            assert!(valid().with_initial_pheromone(v).validate().is_err());
            assert!(valid().with_min_edge(v).validate().is_err());
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "ants": 5, "iterations": 3, "alpha": 1.0, "beta": 2.0,
            "evaporation": 0.5, "deposit": 10.0, "initialPheromone": 0.1,
            "minEdge": 1.0
        }"#;
        let config: AntColonyConfig = serde_json::from_str(json).expect("valid json");
        assert_eq!(config.ants, 5);
        assert_eq!(config.initial_pheromone, 0.1);
        assert_eq!(config.min_edge, 1.0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_missing_parameter_fails() {
        let json = r#"{"ants": 5, "iterations": 3}"#;
        assert!(serde_json::from_str::<AntColonyConfig>(json).is_err());
    }
}
