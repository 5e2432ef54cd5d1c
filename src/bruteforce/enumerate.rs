//! Lazy enumerators for exhaustive search.
//!
//! Both iterators keep their entire state on the heap, yield one item per
//! `next()`, and always start over from the first item when constructed
//! again.

/// All permutations of `0..n` in lexicographic order.
///
/// `n = 0` yields a single empty permutation.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.current.clone();

        // Narayana's next-permutation step
        let a = &mut self.current;
        match (1..a.len()).rev().find(|&i| a[i - 1] < a[i]) {
            Some(i) => {
                let pivot = i - 1;
                let swap_with = (i..a.len()).rev().find(|&j| a[j] > a[pivot]).unwrap_or(i);
                a.swap(pivot, swap_with);
                a[i..].reverse();
            }
            None => self.done = true,
        }
        Some(out)
    }
}

/// Restricted-growth strings: assignments of `n` items to at most `k`
/// interchangeable slots, each up to relabelling of slots exactly once.
///
/// Item 0 always sits in slot 0; item `i` may join any slot already opened
/// by items `0..i` or open the next one, while fewer than `k` are open.
/// Yields in lexicographic order. `n = 0` yields one empty assignment;
/// `k = 0` with `n > 0` yields nothing.
///
/// # Examples
///
/// ```
/// use u_pmsp::bruteforce::Partitions;
///
/// let all: Vec<Vec<usize>> = Partitions::new(3, 2).collect();
/// assert_eq!(all, vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 0], vec![0, 1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Partitions {
    slots: Vec<usize>,
    /// `prefix_max[i]` = max of `slots[..=i]`.
    prefix_max: Vec<usize>,
    limit: usize,
    done: bool,
}

impl Partitions {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            slots: vec![0; n],
            prefix_max: vec![0; n],
            limit: k,
            done: n > 0 && k == 0,
        }
    }

    fn advance(&mut self) {
        let n = self.slots.len();
        for i in (1..n).rev() {
            let ceiling = (self.prefix_max[i - 1] + 1).min(self.limit - 1);
            if self.slots[i] < ceiling {
                self.slots[i] += 1;
                self.prefix_max[i] = self.prefix_max[i - 1].max(self.slots[i]);
                for j in i + 1..n {
                    self.slots[j] = 0;
                    self.prefix_max[j] = self.prefix_max[i];
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for Partitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.slots.clone();
        self.advance();
        Some(out)
    }
}
