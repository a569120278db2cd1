//! Binary indexed (Fenwick) tree for prefix sums.

use num_traits::Num;

/// A Fenwick tree over an array of numbers.
///
/// Point increments and prefix sums are O(log n) with n + 1 words of
/// storage. Generic over any [`num_traits::Num`] scalar.
#[derive(Clone, Debug)]
pub struct BinaryIndexedTree<T> {
    len: usize,
    tree: Vec<T>,
}

impl<T: Num + Copy> BinaryIndexedTree<T> {
    /// Creates a tree of `len` zeros.
    pub fn new(len: usize) -> Self {
        Self { len, tree: vec![T::zero(); len + 1] }
    }

    /// Builds a tree over the given values in O(n log n).
    pub fn from_values(values: &[T]) -> Self {
        let mut tree = Self::new(values.len());
        for (i, &v) in values.iter().enumerate() {
            tree.add(i, v);
        }
        tree
    }

    /// Number of underlying slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `delta` to index `i`. False when out of range.
    pub fn add(&mut self, i: usize, delta: T) -> bool {
        if i >= self.len {
            return false;
        }
        let mut pos = i + 1;
        while pos <= self.len {
            self.tree[pos] = self.tree[pos] + delta;
            pos += pos & pos.wrapping_neg();
        }
        true
    }

    /// Sum of the first `count` values.
    pub fn prefix_sum(&self, count: usize) -> T {
        let mut pos = count.min(self.len);
        let mut sum = T::zero();
        while pos > 0 {
            sum = sum + self.tree[pos];
            pos -= pos & pos.wrapping_neg();
        }
        sum
    }

    /// Sum over the inclusive range `[l, r]`.
    pub fn range_sum(&self, l: usize, r: usize) -> T {
        if l > r {
            return T::zero();
        }
        self.prefix_sum(r + 1) - self.prefix_sum(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sums() {
        let tree = BinaryIndexedTree::from_values(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.prefix_sum(0), 0);
        assert_eq!(tree.prefix_sum(3), 6);
        assert_eq!(tree.prefix_sum(5), 15);
        assert_eq!(tree.prefix_sum(99), 15);
    }

    #[test]
    fn test_point_updates() {
        let mut tree = BinaryIndexedTree::new(4);
        assert!(tree.add(0, 10));
        assert!(tree.add(3, 5));
        assert!(!tree.add(4, 1));
        assert_eq!(tree.prefix_sum(4), 15);
        assert_eq!(tree.range_sum(1, 3), 5);
        assert_eq!(tree.range_sum(3, 1), 0);
    }

    #[test]
    fn test_matches_naive_sums() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(13);
        let mut values = vec![0i64; 48];
        let mut tree = BinaryIndexedTree::new(48);
        for _ in 0..200 {
            let i = rng.gen_range(0..48);
            let delta = rng.gen_range(-20..20);
            values[i] += delta;
            tree.add(i, delta);
        }
        for l in 0..48 {
            let naive: i64 = values[l..].iter().sum();
            assert_eq!(tree.range_sum(l, 47), naive);
        }
    }
}
