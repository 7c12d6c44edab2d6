mod fenwick;
mod segment_tree;
mod util;

use std::ops::RangeBounds;

pub use fenwick::FenwickSum;
pub use segment_tree::SegmentTreeSum;

/// Range-sum / range-add interface over a fixed-size `i64` sequence.
///
/// - Ranges may be any bounds; the portion outside `0..len` is silently
///   clipped, and an empty or inverted range sums to `0` / updates nothing.
/// - `sum` takes `&mut self`: implementations may rewrite cached state while
///   answering (lazy pushdown), without changing any logical value.
/// - `add` applies the same delta to every element the range covers.
pub trait RangeSumRangeAdd: Sized {
    fn new(values: &[i64]) -> Self;
    fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> i64;
    fn add<R: RangeBounds<usize>>(&mut self, range: R, delta: i64);
}
