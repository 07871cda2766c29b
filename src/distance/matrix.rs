//! Dense haversine distance matrix.

use super::haversine;
use crate::models::Location;

/// A dense n×n matrix of haversine distances, stored in row-major order.
///
/// Entry `(i, j)` is exactly `haversine(locations[i], locations[j])`, so
/// sums over the matrix agree bit-for-bit with [`total_distance`] over the
/// same locations.
///
/// [`total_distance`]: super::total_distance
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::distance::{haversine, DistanceMatrix};
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 1.0),
///     Location::new(1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), haversine(locations[0], locations[1]));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix for the given locations.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(locations[i], locations[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the open path visiting `order` (indices into the matrix).
    pub fn tour_distance(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|pair| self.get(pair[0], pair[1]))
            .sum()
    }

    /// Length of the closed tour over `order`, including the return leg.
    pub fn closed_tour_distance(&self, order: &[usize]) -> f64 {
        match (order.first(), order.last()) {
            (Some(&first), Some(&last)) if order.len() > 1 => {
                self.tour_distance(order) + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}
