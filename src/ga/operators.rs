//! Permutation crossover and mutation operators.
//!
//! Both operators act on index permutations and always yield a permutation
//! of the same indices.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::Rng;

/// Order crossover producing a single child.
///
/// # Algorithm
///
/// 1. Draw two cut points uniformly from `0..n` and sort them
/// 2. Copy `parent1[start..end]` to the front of the child
/// 3. Append the genes of `parent2`, in order, that are not in that block
///
/// The block may be empty when both cuts coincide, in which case the child
/// is a copy of `parent2`.
///
/// # Examples
///
/// ```
/// use geo_tour::ga::operators::order_crossover;
/// use geo_tour::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut child = order_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &mut rng);
/// child.sort();
/// assert_eq!(child, vec![0, 1, 2, 3, 4]);
/// ```
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    if n == 0 {
        return parent2.to_vec();
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    ox_build_child(parent1, parent2, a.min(b), a.max(b))
}

/// Builds one child from `template[start..end]` followed by the rest of `donor`.
///
/// Both parents must be permutations of `0..n`.
pub(crate) fn ox_build_child(
    template: &[usize],
    donor: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let block = &template[start..end];
    let mut in_block = vec![false; template.len()];
    for &gene in block {
        in_block[gene] = true;
    }

    let mut child = Vec::with_capacity(donor.len());
    child.extend_from_slice(block);
    child.extend(donor.iter().copied().filter(|&gene| !in_block[gene]));
    child
}

/// Swap mutation: each position, with probability `rate`, is swapped with a
/// uniformly chosen different position.
///
/// Permutations shorter than two genes are left untouched.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            perm.swap(i, j);
        }
    }
}
