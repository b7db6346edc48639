use std::collections::HashSet;
use std::hash::Hash;

use tabula_model::{Coord, Range};

use super::corner::{ByBegin, ByEnd};
use super::index::CornerIndex;
use super::readonly::ReadOnlyRangeStore;
use crate::StoreError;

/// Operation surface shared by the mutable range store and its read-only
/// wrapper.
///
/// Mutators are fallible so a read-only view can reject them uniformly with
/// [`StoreError::ReadOnly`]; on the mutable store they never fail.
///
/// All query results are owned snapshots: later mutation of the store is
/// never observable through a previously returned collection.
pub trait RangeStore<V> {
    /// Values recorded against exactly `range` (both corners match).
    fn load_exact(&self, range: Range) -> Vec<V>;

    /// Distinct ranges whose bounds contain `coord`.
    fn ranges_containing(&self, coord: Coord) -> HashSet<Range>;

    /// Deduplicated values from all ranges containing `coord`.
    fn values_containing(&self, coord: Coord) -> HashSet<V>;

    /// Total number of (range, value) associations currently stored.
    fn count(&self) -> usize;

    /// Record `value` against `range`. Idempotent: recording an existing
    /// association is a no-op.
    fn add_value(&mut self, range: Range, value: V) -> Result<(), StoreError>;

    /// Swap `old_value` for `new_value` under `range`.
    ///
    /// Returns `Ok(false)` (and changes nothing) when `old_value` is not
    /// currently recorded there, or when `new_value == old_value`.
    fn replace_value(&mut self, range: Range, new_value: V, old_value: V)
        -> Result<bool, StoreError>;

    /// Remove one (range, value) association. Returns whether it existed.
    fn remove_value(&mut self, range: Range, value: V) -> Result<bool, StoreError>;

    /// Remove every value recorded against exactly `range` in one step.
    fn delete(&mut self, range: Range) -> Result<(), StoreError>;
}

/// In-memory range store: maps rectangular ranges to sets of values and
/// answers exact-range and point-containment ("stabbing") queries.
///
/// Two corner indexes are kept in lock-step: one keyed by each range's begin
/// corner in ascending row-major order, one keyed by the end corner in
/// descending order. Every mutation updates both before returning, so a value
/// is recorded against a range in the by-begin index if and only if it is in
/// the by-end index. This type is the only code path that touches either
/// index.
///
/// No internal locking: callers provide external synchronization (`&mut self`
/// mutators make a torn dual-index update unrepresentable in safe Rust).
pub struct TreeRangeStore<V> {
    by_begin: CornerIndex<ByBegin, V>,
    by_end: CornerIndex<ByEnd, V>,
}

impl<V> TreeRangeStore<V>
where
    V: Clone + Eq + Hash,
{
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            by_begin: CornerIndex::new(),
            by_end: CornerIndex::new(),
        }
    }

    /// Returns true if no associations are stored.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Freeze this store behind a read-only view.
    pub fn as_read_only(&self) -> ReadOnlyRangeStore<'_, V> {
        ReadOnlyRangeStore::new(self)
    }

    fn load_exact_impl(&self, range: Range) -> Vec<V> {
        self.by_begin
            .bucket(range)
            .and_then(|bucket| bucket.load(range.end))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Point query fan-out: walk both corner indexes through `coord` and
    /// merge confirmed hits. Each index's walk prunes on row-major order
    /// only, so candidates are re-checked with the exact two-axis
    /// containment test before contributing.
    fn stab(&self, coord: Coord, mut visit: impl FnMut(Range, &HashSet<V>)) {
        for (range, values) in self.by_begin.candidates_containing(coord) {
            if range.contains(coord) {
                visit(range, values);
            }
        }
        for (range, values) in self.by_end.candidates_containing(coord) {
            if range.contains(coord) {
                visit(range, values);
            }
        }
    }

    fn add_value_impl(&mut self, range: Range, value: V) {
        let inserted = self.by_begin.add(range, value.clone());
        let inserted_end = self.by_end.add(range, value);
        debug_assert_eq!(inserted, inserted_end, "corner indexes disagree on {range}");
        if inserted {
            log::trace!("range store: add value for {range}");
        }
    }

    fn replace_value_impl(&mut self, range: Range, new_value: V, old_value: V) -> bool {
        if new_value == old_value {
            return false;
        }
        if !self.by_begin.replace(range, new_value.clone(), &old_value) {
            return false;
        }
        let replaced_end = self.by_end.replace(range, new_value, &old_value);
        debug_assert!(replaced_end, "corner indexes disagree on {range}");
        log::trace!("range store: replace value for {range}");
        true
    }

    fn remove_value_impl(&mut self, range: Range, value: V) -> bool {
        let removed = self.by_begin.remove(range, &value);
        let removed_end = self.by_end.remove(range, &value);
        debug_assert_eq!(removed, removed_end, "corner indexes disagree on {range}");
        if removed {
            log::trace!("range store: remove value for {range}");
        }
        removed
    }

    fn delete_impl(&mut self, range: Range) {
        let removed = self.by_begin.delete_range(range);
        let removed_end = self.by_end.delete_range(range);
        debug_assert_eq!(removed, removed_end, "corner indexes disagree on {range}");
        if removed > 0 {
            log::debug!("range store: delete {range} ({removed} values)");
        }
    }
}

impl<V> Default for TreeRangeStore<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RangeStore<V> for TreeRangeStore<V>
where
    V: Clone + Eq + Hash,
{
    fn load_exact(&self, range: Range) -> Vec<V> {
        self.load_exact_impl(range)
    }

    fn ranges_containing(&self, coord: Coord) -> HashSet<Range> {
        let mut ranges = HashSet::new();
        self.stab(coord, |range, _| {
            ranges.insert(range);
        });
        ranges
    }

    fn values_containing(&self, coord: Coord) -> HashSet<V> {
        let mut values = HashSet::new();
        self.stab(coord, |_, set| {
            values.extend(set.iter().cloned());
        });
        values
    }

    fn count(&self) -> usize {
        let count = self.by_begin.count();
        debug_assert_eq!(count, self.by_end.count(), "corner indexes disagree");
        count
    }

    fn add_value(&mut self, range: Range, value: V) -> Result<(), StoreError> {
        self.add_value_impl(range, value);
        Ok(())
    }

    fn replace_value(
        &mut self,
        range: Range,
        new_value: V,
        old_value: V,
    ) -> Result<bool, StoreError> {
        Ok(self.replace_value_impl(range, new_value, old_value))
    }

    fn remove_value(&mut self, range: Range, value: V) -> Result<bool, StoreError> {
        Ok(self.remove_value_impl(range, value))
    }

    fn delete(&mut self, range: Range) -> Result<(), StoreError> {
        self.delete_impl(range);
        Ok(())
    }
}
