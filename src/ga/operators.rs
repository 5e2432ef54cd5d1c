//! Permutation operators for the genetic solver.
//!
//! Chromosomes are job orderings: permutations of indices into
//! `problem.jobs`.
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//! - [`swap_mutation`]: exchange two distinct positions, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use crate::random::distinct_pair;

/// Order Crossover (OX) producing one child.
///
/// # Algorithm
///
/// 1. Pick two distinct cut positions `start < end`
/// 2. Copy `parent1[start..=end]` to the same positions of the child
/// 3. Fill the remaining positions left to right with `parent2`'s
///    elements in their order, skipping elements already present
///
/// Parents shorter than two elements are returned as a copy of `parent1`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    match distinct_pair(parent1.len(), rng) {
        Some((start, end)) => ox_child(parent1, parent2, start, end),
        None => parent1.to_vec(),
    }
}

/// Builds one OX child: segment `[start, end]` from `template`, the rest
/// from `donor`.
pub(crate) fn ox_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        present[template[i]] = true;
    }

    let mut fill = donor.iter().copied().filter(|&v| !present[v]);
    for (i, slot) in child.iter_mut().enumerate() {
        if (start..=end).contains(&i) {
            continue;
        }
        if let Some(v) = fill.next() {
            *slot = v;
        }
    }
    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// No-op for fewer than two elements.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if let Some((i, j)) = distinct_pair(perm.len(), rng) {
        perm.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, random_permutation};

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        perm.iter().all(|&v| v < n && !std::mem::replace(&mut seen[v], true))
    }

    #[test]
    fn test_ox_child_fills_left_to_right() {
        let p1 = [0, 1, 2, 3, 4, 5];
        let p2 = [5, 3, 1, 0, 4, 2];
        // segment [2, 3] = {2, 3}; fill 5, 1, 0, 4 into positions 0, 1, 4, 5
        assert_eq!(ox_child(&p1, &p2, 2, 3), vec![5, 1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_ox_full_segment_copies_template() {
        let p1 = [3, 1, 0, 2];
        let p2 = [0, 1, 2, 3];
        assert_eq!(ox_child(&p1, &p2, 0, 3), p1.to_vec());
    }

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = create_rng(Some(42));
        for _ in 0..200 {
            let p1 = random_permutation(12, &mut rng);
            let p2 = random_permutation(12, &mut rng);
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 12));
        }
    }

    #[test]
    fn test_ox_short_parents() {
        let mut rng = create_rng(Some(1));
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
        assert!(order_crossover(&[], &[], &mut rng).is_empty());
    }

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = create_rng(Some(9));
        for _ in 0..100 {
            let original: Vec<usize> = (0..8).collect();
            let mut perm = original.clone();
            swap_mutation(&mut perm, &mut rng);
            let diff = perm.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert_eq!(diff, 2);
            assert!(is_valid_permutation(&perm, 8));
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = create_rng(Some(0));
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }
}
