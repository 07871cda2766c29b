//! Fitness-proportionate mating pool construction.

use super::chromosome::Tour;

/// Absorbs floating-point error when summing fitness values.
pub const SHARE_TOLERANCE: f64 = 1e-9;

/// Builds a mating pool of population indices.
///
/// Each tour appears `floor(normalized_fitness * population_size)` times,
/// where `normalized_fitness = fitness / Σ fitness`. Fractional remainders
/// are dropped, so the pool can be smaller than the population. Shares
/// within [`SHARE_TOLERANCE`] below an integer count as that integer, so
/// equally fit tours get one copy each.
///
/// A non-finite share (for instance when every tour has zero length)
/// counts as zero, so the pool can also be empty.
///
/// # Examples
///
/// ```
/// use geo_tour::models::Location;
/// use geo_tour::distance::DistanceMatrix;
/// use geo_tour::ga::{mating_pool, Tour};
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 1.0),
/// ]);
/// let population = vec![Tour::new(vec![0, 1], &dm), Tour::new(vec![1, 0], &dm)];
/// assert_eq!(mating_pool(&population), vec![0, 1]);
/// ```
pub fn mating_pool(population: &[Tour]) -> Vec<usize> {
    let total_fitness: f64 = population.iter().map(Tour::fitness).sum();
    let size = population.len() as f64;

    let mut pool = Vec::with_capacity(population.len());
    for (idx, tour) in population.iter().enumerate() {
        let share = tour.fitness() / total_fitness * size + SHARE_TOLERANCE;
        if !share.is_finite() || share < 1.0 {
            continue;
        }
        let copies = share.floor() as usize;
        pool.extend(std::iter::repeat(idx).take(copies));
    }
    pool
}
