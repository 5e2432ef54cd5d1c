//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

use crate::model::Time;

/// Tournament selection: sample `k` distinct individuals, return the index
/// of the fittest (lowest objective). Among equals the one sampled first
/// wins.
///
/// `k` is clamped to `1..=fitness.len()`.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: Rng>(fitness: &[Time], k: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");
    let k = k.clamp(1, fitness.len());

    let mut best: Option<usize> = None;
    for idx in index::sample(rng, fitness.len(), k) {
        if best.is_none_or(|b| fitness[idx] < fitness[b]) {
            best = Some(idx);
        }
    }
    best.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_full_tournament_picks_best() {
        let fitness = [9, 4, 7, 2, 8];
        let mut rng = create_rng(Some(42));
        for _ in 0..20 {
            assert_eq!(tournament(&fitness, 5, &mut rng), 3);
        }
    }

    #[test]
    fn test_selection_pressure() {
        let fitness: Vec<Time> = (0..20).collect();
        let mut rng = create_rng(Some(7));
        let trials = 2000;
        let total: usize = (0..trials).map(|_| tournament(&fitness, 3, &mut rng)).sum();
        // uniform picking averages 9.5; a 3-way tournament pulls far lower
        assert!((total as f64 / trials as f64) < 7.0);
    }

    #[test]
    fn test_k_clamped() {
        let mut rng = create_rng(Some(3));
        assert_eq!(tournament(&[5], 3, &mut rng), 0);
        let idx = tournament(&[5, 1], 0, &mut rng);
        assert!(idx < 2);
    }
}
