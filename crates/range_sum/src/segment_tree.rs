use std::ops::RangeBounds;

use crate::RangeSumRangeAdd;
use crate::util::closed_range;

/// Segment tree with additive lazy propagation.
///
/// Nodes live in a flat 1-indexed array of length `4 * len` (slot 0 unused);
/// node `i` covers a closed index interval, its children `2i` and `2i + 1`
/// cover the two halves. `pending[i] != 0` means every element below `i`
/// still owes that delta; it is settled the next time `i` is visited, never
/// eagerly.
#[derive(Clone, Debug)]
pub struct SegmentTreeSum {
    nodes: Vec<i64>,
    pending: Vec<i64>,
    len: usize,
}

impl SegmentTreeSum {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn build(&mut self, node: usize, start: usize, end: usize, values: &[i64]) {
        if start > end {
            return;
        }
        if start == end {
            self.nodes[node] = values[start];
            return;
        }

        let mid = (start + end) / 2;
        self.build(2 * node, start, mid, values);
        self.build(2 * node + 1, mid + 1, end, values);
        self.nodes[node] = self.nodes[2 * node] + self.nodes[2 * node + 1];
    }

    /// Settles `pending[node]`: folds it into the node's own sum and hands it
    /// to both children. A leaf never keeps a pending delta past this point.
    fn push_down(&mut self, node: usize, start: usize, end: usize) {
        let delta = self.pending[node];
        self.nodes[node] += delta * (end - start + 1) as i64;
        if start != end {
            self.pending[2 * node] += delta;
            self.pending[2 * node + 1] += delta;
        }
        self.pending[node] = 0;
    }

    fn query(&mut self, node: usize, start: usize, end: usize, left: usize, right: usize) -> i64 {
        if start > end || start > right || end < left {
            return 0;
        }

        if self.pending[node] != 0 {
            self.push_down(node, start, end);
        }

        if left <= start && end <= right {
            return self.nodes[node];
        }

        let mid = (start + end) / 2;
        self.query(2 * node, start, mid, left, right)
            + self.query(2 * node + 1, mid + 1, end, left, right)
    }

    fn update(
        &mut self,
        node: usize,
        start: usize,
        end: usize,
        left: usize,
        right: usize,
        delta: i64,
    ) {
        // Unlike query, pending is settled before the overlap check: even a
        // visit that touches nothing leaves this node clean.
        if self.pending[node] != 0 {
            self.push_down(node, start, end);
        }

        if start > end || start > right || end < left {
            return;
        }

        if left <= start && end <= right {
            self.nodes[node] += delta * (end - start + 1) as i64;
            if start != end {
                self.pending[2 * node] += delta;
                self.pending[2 * node + 1] += delta;
            }
            return;
        }

        let mid = (start + end) / 2;
        self.update(2 * node, start, mid, left, right, delta);
        self.update(2 * node + 1, mid + 1, end, left, right, delta);
        self.nodes[node] = self.nodes[2 * node] + self.nodes[2 * node + 1];
    }
}

impl RangeSumRangeAdd for SegmentTreeSum {
    fn new(values: &[i64]) -> Self {
        let n = values.len();
        let mut tree = Self {
            nodes: vec![0; 4 * n],
            pending: vec![0; 4 * n],
            len: n,
        };
        if n > 0 {
            tree.build(1, 0, n - 1, values);
        }
        tree
    }

    fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> i64 {
        let Some((left, right)) = closed_range(range, self.len) else {
            return 0;
        };
        self.query(1, 0, self.len - 1, left, right)
    }

    fn add<R: RangeBounds<usize>>(&mut self, range: R, delta: i64) {
        let Some((left, right)) = closed_range(range, self.len) else {
            return;
        };
        self.update(1, 0, self.len - 1, left, right, delta);
    }
}
