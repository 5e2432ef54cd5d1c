//! Solver-owned randomness.
//!
//! Every stochastic run constructs its own generator from the configured
//! seed (or a fresh one), so concurrent runs never share RNG state and a
//! fixed seed always replays the same search.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a run-local generator. `None` draws a fresh seed.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Two distinct positions in `0..n`, smaller first. `None` if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    Some((i.min(j), i.max(j)))
}
