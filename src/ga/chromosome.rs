//! Tour chromosome for the genetic solver.
//!
//! A chromosome is a permutation of input indices rather than of
//! coordinates, so two input locations that share coordinates remain
//! distinct genes.

use crate::distance::DistanceMatrix;

/// A permutation of location indices together with its open-path length.
///
/// The permutation carries no closing duplicate.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::distance::DistanceMatrix;
/// use geo_tour::ga::Tour;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 1.0),
/// ]);
/// let tour = Tour::new(vec![1, 0], &dm);
/// assert_eq!(tour.order(), &[1, 0]);
/// assert_eq!(tour.distance(), dm.get(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    distance: f64,
}

impl Tour {
    /// Creates a tour, evaluating its length against `distances`.
    pub fn new(order: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let distance = distances.tour_distance(&order);
        Self { order, distance }
    }

    /// Returns the index permutation.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Open-path length in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Selection fitness, `1 / distance`.
    ///
    /// A zero-length tour has infinite fitness.
    pub fn fitness(&self) -> f64 {
        1.0 / self.distance
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour has no genes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn matrix() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::new(0.0, 0.0),
            Location::new(0.0, 1.0),
            Location::new(0.0, 3.0),
        ])
    }

    #[test]
    fn test_tour_new_evaluates_distance() {
        let dm = matrix();
        let tour = Tour::new(vec![0, 2, 1], &dm);
        assert_eq!(tour.distance(), dm.get(0, 2) + dm.get(2, 1));
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
    }

    #[test]
    fn test_fitness_is_inverse_distance() {
        let dm = matrix();
        let tour = Tour::new(vec![0, 1, 2], &dm);
        assert!((tour.fitness() * tour.distance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_tour_has_infinite_fitness() {
        let dm = DistanceMatrix::from_locations(&[Location::new(1.0, 1.0); 2]);
        let tour = Tour::new(vec![0, 1], &dm);
        assert_eq!(tour.distance(), 0.0);
        assert_eq!(tour.fitness(), f64::INFINITY);
    }
}
