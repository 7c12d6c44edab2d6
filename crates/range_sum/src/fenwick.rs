use std::ops::RangeBounds;

use crate::RangeSumRangeAdd;
use crate::util::closed_range;

#[inline(always)]
fn point_add(tree: &mut [i64], mut index: usize, value: i64) {
    while index < tree.len() {
        tree[index] += value;
        index += index & index.wrapping_neg();
    }
}

#[inline(always)]
fn prefix(tree: &[i64], mut index: usize) -> i64 {
    let mut acc = 0;
    while index > 0 {
        acc += tree[index];
        index &= index - 1;
    }
    acc
}

/// Two 1-indexed binary indexed trees encoding range adds as point updates.
///
/// A range add of `d` over `[l, r]` stores `d` in `deltas` at `l` (and `-d`
/// past `r`), with `scaled` holding the boundary corrections, so that
/// `prefix_sum(i) = i * prefix(deltas, i) - prefix(scaled, i)`.
#[derive(Clone, Debug)]
pub struct FenwickSum {
    deltas: Vec<i64>,
    scaled: Vec<i64>,
}

impl FenwickSum {
    pub fn len(&self) -> usize {
        self.deltas.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // 1-based closed interval; a write past the last slot falls off the
    // arrays and is dropped, which is exactly the no-op it encodes.
    fn range_add(&mut self, left: usize, right: usize, delta: i64) {
        point_add(&mut self.deltas, left, delta);
        point_add(&mut self.scaled, left, delta * (left as i64 - 1));
        point_add(&mut self.deltas, right + 1, -delta);
        point_add(&mut self.scaled, right + 1, -delta * right as i64);
    }

    fn prefix_sum(&self, index: usize) -> i64 {
        index as i64 * prefix(&self.deltas, index) - prefix(&self.scaled, index)
    }
}

impl RangeSumRangeAdd for FenwickSum {
    fn new(values: &[i64]) -> Self {
        let mut fenwick = Self {
            deltas: vec![0; values.len() + 1],
            scaled: vec![0; values.len() + 1],
        };
        for (i, &value) in values.iter().enumerate() {
            fenwick.range_add(i + 1, i + 1, value);
        }
        fenwick
    }

    fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> i64 {
        let Some((left, right)) = closed_range(range, self.len()) else {
            return 0;
        };
        self.prefix_sum(right + 1) - self.prefix_sum(left)
    }

    fn add<R: RangeBounds<usize>>(&mut self, range: R, delta: i64) {
        let Some((left, right)) = closed_range(range, self.len()) else {
            return;
        };
        self.range_add(left + 1, right + 1, delta);
    }
}
