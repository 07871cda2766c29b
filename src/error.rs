//! Error types shared by all solvers.

use thiserror::Error;

/// Errors surfaced by solver configuration and input validation.
///
/// Degenerate inputs (zero or one location) are not errors: every solver
/// returns the degenerate route and reports
/// [`Termination::TooFewLocations`](crate::models::Termination::TooFewLocations).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Solver parameters cannot produce a usable run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An input location has a non-finite or out-of-range coordinate.
    #[error("location {index} has invalid coordinates ({lat}, {lng})")]
    InvalidLocation {
        /// Position of the offending location in the input.
        index: usize,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, TspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_configuration() {
        let err = TspError::InvalidConfiguration("population_size must be at least 2".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be at least 2"
        );
    }

    #[test]
    fn test_display_invalid_location() {
        let err = TspError::InvalidLocation {
            index: 3,
            lat: 91.0,
            lng: 0.0,
        };
        assert_eq!(err.to_string(), "location 3 has invalid coordinates (91, 0)");
    }
}
