//! Memoized alternative counts: the number of ways to arrange `k` separating
//! gaps (including the two outer ones) over `n` slack positions.
//!
//! Grounded in `original_source/src/picross/src/binomial.cpp`'s
//! `BinomialCoefficientsCache::partition_n_elts_into_k_buckets`, which computes
//! the same recursion via a triangular memo indexed by `n` and `k`. Ported here
//! with `Option<u32>` cells standing in for its "zero means unset" sentinel,
//! and saturating `u32` arithmetic instead of its unchecked `size_t` addition.

use std::cell::RefCell;

/// Count of line alternatives. Saturates at [`AltCount::MAX`] rather than
/// overflowing; a saturated count is a lower bound, never an exact value.
pub type AltCount = u32;

/// `partition(n, k)`: number of ways to distribute `n` indistinguishable
/// slack units among `k` buckets.
///
/// Memoizes every `(n, k)` pair it is asked for, not just the upper
/// triangle `k >= 2, n >= 3` the packed layout favors; smaller inputs fall
/// through to the closed-form base cases below without needing a cache slot.
#[derive(Debug, Default)]
pub struct BinomialCache {
    // triangular[(n - 3) * (n - 2) / 2 + (k - 2)] == partition(n, k), for n >= 3, k >= 2
    triangular: RefCell<Vec<Option<AltCount>>>,
}

impl BinomialCache {
    pub fn new() -> Self {
        BinomialCache {
            triangular: RefCell::new(Vec::new()),
        }
    }

    /// Number of ways to partition `n` slack units into `k` buckets.
    ///
    /// `k == 0` has one partition iff `n == 0`, zero otherwise. `k == 1` and
    /// `n == 0` both have exactly one partition regardless of the other.
    pub fn partition(&self, n: usize, k: usize) -> AltCount {
        if k == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        if k == 1 {
            return 1;
        }
        if n == 0 {
            return 1;
        }
        if k >= 2 && n >= 3 {
            if let Some(cached) = self.get_triangular(n, k) {
                return cached;
            }
        }
        let value = (0..=n)
            .map(|e| self.partition(n - e, k - 1))
            .fold(0u32, |acc, c| acc.saturating_add(c));
        if k >= 2 && n >= 3 {
            self.set_triangular(n, k, value);
        }
        value
    }

    fn triangular_index(n: usize, k: usize) -> usize {
        (n - 3) * (n - 2) / 2 + (k - 2)
    }

    fn get_triangular(&self, n: usize, k: usize) -> Option<AltCount> {
        let idx = Self::triangular_index(n, k);
        self.triangular.borrow().get(idx).copied().flatten()
    }

    fn set_triangular(&self, n: usize, k: usize, value: AltCount) {
        let idx = Self::triangular_index(n, k);
        let mut table = self.triangular.borrow_mut();
        if table.len() <= idx {
            table.resize(idx + 1, None);
        }
        table[idx] = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bucket_has_one_partition() {
        let cache = BinomialCache::new();
        for n in 0..10 {
            assert_eq!(cache.partition(n, 1), 1);
        }
    }

    #[test]
    fn zero_slack_has_one_partition() {
        let cache = BinomialCache::new();
        for k in 0..10 {
            assert_eq!(cache.partition(0, k), 1);
        }
    }

    #[test]
    fn matches_stars_and_bars_small_cases() {
        let cache = BinomialCache::new();
        // C(n + k - 1, k - 1)
        assert_eq!(cache.partition(2, 2), 3);
        assert_eq!(cache.partition(3, 2), 4);
        assert_eq!(cache.partition(2, 3), 6);
        assert_eq!(cache.partition(4, 3), 15);
    }

    #[test]
    fn memoized_result_matches_recomputed_result() {
        let cache = BinomialCache::new();
        let first = cache.partition(12, 5);
        let second = cache.partition(12, 5);
        assert_eq!(first, second);
    }

    #[quickcheck]
    fn partition_grows_monotonically_with_slack(n: u8, k: u8) -> bool {
        let cache = BinomialCache::new();
        let n = (n % 12) as usize;
        let k = (k % 6) as usize;
        cache.partition(n, k) <= cache.partition(n + 1, k)
    }
}
