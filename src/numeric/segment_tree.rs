//! Segment tree for range sums with point updates.

use num_traits::Num;

/// A segment tree over an array of numbers.
///
/// Supports point assignment and inclusive range-sum queries, both
/// O(log n). Generic over any [`num_traits::Num`] scalar.
#[derive(Clone, Debug)]
pub struct SegmentTree<T> {
    len: usize,
    tree: Vec<T>,
}

impl<T: Num + Copy> SegmentTree<T> {
    /// Builds a tree over the given values.
    pub fn new(values: &[T]) -> Self {
        let len = values.len();
        let mut tree = vec![T::zero(); len.max(1) * 4];
        if len > 0 {
            Self::build(&mut tree, values, 1, 0, len - 1);
        }
        Self { len, tree }
    }

    fn build(tree: &mut [T], values: &[T], node: usize, lo: usize, hi: usize) {
        if lo == hi {
            tree[node] = values[lo];
            return;
        }
        let mid = (lo + hi) / 2;
        Self::build(tree, values, node * 2, lo, mid);
        Self::build(tree, values, node * 2 + 1, mid + 1, hi);
        tree[node] = tree[node * 2] + tree[node * 2 + 1];
    }

    /// Number of underlying values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when built over an empty array.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Assigns `value` to index `i`. False when out of range.
    pub fn update(&mut self, i: usize, value: T) -> bool {
        if i >= self.len {
            return false;
        }
        self.update_rec(1, 0, self.len - 1, i, value);
        true
    }

    fn update_rec(&mut self, node: usize, lo: usize, hi: usize, i: usize, value: T) {
        if lo == hi {
            self.tree[node] = value;
            return;
        }
        let mid = (lo + hi) / 2;
        if i <= mid {
            self.update_rec(node * 2, lo, mid, i, value);
        } else {
            self.update_rec(node * 2 + 1, mid + 1, hi, i, value);
        }
        self.tree[node] = self.tree[node * 2] + self.tree[node * 2 + 1];
    }

    /// Sum over the inclusive range `[l, r]`; zero for an empty or
    /// inverted range.
    pub fn query(&self, l: usize, r: usize) -> T {
        if self.len == 0 || l > r || l >= self.len {
            return T::zero();
        }
        self.query_rec(1, 0, self.len - 1, l, r.min(self.len - 1))
    }

    fn query_rec(&self, node: usize, lo: usize, hi: usize, l: usize, r: usize) -> T {
        if r < lo || hi < l {
            return T::zero();
        }
        if l <= lo && hi <= r {
            return self.tree[node];
        }
        let mid = (lo + hi) / 2;
        self.query_rec(node * 2, lo, mid, l, r) + self.query_rec(node * 2 + 1, mid + 1, hi, l, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_sums() {
        let tree = SegmentTree::new(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.query(0, 4), 15);
        assert_eq!(tree.query(1, 3), 9);
        assert_eq!(tree.query(2, 2), 3);
        assert_eq!(tree.query(3, 1), 0);
        assert_eq!(tree.query(9, 10), 0);
    }

    #[test]
    fn test_point_update() {
        let mut tree = SegmentTree::new(&[1, 2, 3, 4]);
        assert!(tree.update(2, 30));
        assert_eq!(tree.query(0, 3), 37);
        assert_eq!(tree.query(2, 3), 34);
        assert!(!tree.update(4, 1));
    }

    #[test]
    fn test_floats_and_empty() {
        let tree: SegmentTree<f64> = SegmentTree::new(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.query(0, 10), 0.0);

        let tree = SegmentTree::new(&[0.5, 1.5, 2.0]);
        assert_eq!(tree.query(0, 2), 4.0);
    }

    #[test]
    fn test_matches_naive_sums() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(11);
        let values: Vec<i64> = (0..64).map(|_| rng.gen_range(-50..50)).collect();
        let tree = SegmentTree::new(&values);
        for _ in 0..100 {
            let l = rng.gen_range(0..64);
            let r = rng.gen_range(l..64);
            let naive: i64 = values[l..=r].iter().sum();
            assert_eq!(tree.query(l, r), naive);
        }
    }
}
