use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use tabula_model::{Coord, Range};

use super::bucket::RangeBucket;
use super::corner::CornerRole;

/// Sorted mapping from one corner role to the bucket of ranges sharing that
/// corner.
///
/// Invariant: no entry holds an empty bucket. Every mutation that can drain a
/// bucket removes the entry in the same call.
pub(crate) struct CornerIndex<R: CornerRole, V> {
    entries: BTreeMap<R::PrimaryKey, RangeBucket<R, V>>,
}

impl<R: CornerRole, V> CornerIndex<R, V>
where
    V: Clone + Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Bucket for `range`'s primary corner, if any range with that corner is
    /// recorded.
    pub(crate) fn bucket(&self, range: Range) -> Option<&RangeBucket<R, V>> {
        self.entries.get(&R::primary_key(R::primary(range)))
    }

    /// Record `value` against `range`, creating the bucket if needed.
    ///
    /// Returns false if the exact association already existed.
    pub(crate) fn add(&mut self, range: Range, value: V) -> bool {
        self.entries
            .entry(R::primary_key(R::primary(range)))
            .or_insert_with(RangeBucket::new)
            .add(R::secondary(range), value)
    }

    /// Swap `old_value` for `new_value` under `range`; false if `old_value`
    /// is not currently recorded there.
    pub(crate) fn replace(&mut self, range: Range, new_value: V, old_value: &V) -> bool {
        let Some(bucket) = self.entries.get_mut(&R::primary_key(R::primary(range))) else {
            return false;
        };
        bucket.replace(R::secondary(range), new_value, old_value)
    }

    /// Remove one (range, value) association; drops the bucket entry if it
    /// drains. Returns whether the association existed.
    pub(crate) fn remove(&mut self, range: Range, value: &V) -> bool {
        let key = R::primary_key(R::primary(range));
        let Some(bucket) = self.entries.get_mut(&key) else {
            return false;
        };
        let (removed, bucket_empty) = bucket.delete(R::secondary(range), value);
        if bucket_empty {
            self.entries.remove(&key);
        }
        removed
    }

    /// Remove every value recorded against exactly `range` in one step;
    /// drops the bucket entry if it drains. Returns how many associations
    /// were removed.
    pub(crate) fn delete_range(&mut self, range: Range) -> usize {
        let key = R::primary_key(R::primary(range));
        let Some(bucket) = self.entries.get_mut(&key) else {
            return 0;
        };
        let (removed, bucket_empty) = bucket.delete_range(R::secondary(range));
        if bucket_empty {
            self.entries.remove(&key);
        }
        removed
    }

    /// Total number of (range, value) associations across all buckets.
    pub(crate) fn count(&self) -> usize {
        self.entries.values().map(RangeBucket::count).sum()
    }

    /// Candidate ranges for a point query at `coord`, with their value sets.
    ///
    /// Walks the index from its first entry through `coord`'s position in
    /// this role's order, and within each visited bucket scans through
    /// `coord` in the secondary order. Both bounds prune on a single axis
    /// (row-major order), so a candidate is not guaranteed to contain
    /// `coord`; the caller confirms containment before using it. No
    /// containing range is ever pruned: componentwise order implies
    /// row-major order on both corners.
    pub(crate) fn candidates_containing(
        &self,
        coord: Coord,
    ) -> impl Iterator<Item = (Range, &HashSet<V>)> {
        self.entries
            .range(..=R::primary_key(coord))
            .flat_map(move |(primary, bucket)| {
                let primary = R::primary_coord(*primary);
                bucket
                    .scan_through(coord)
                    .map(move |(secondary, set)| (R::range(primary, secondary), set))
            })
    }
}
