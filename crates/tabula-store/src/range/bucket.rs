use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use tabula_model::Coord;

use super::corner::CornerRole;

/// Values for every range sharing one primary corner, keyed by each range's
/// *other* corner.
///
/// The two-level nesting is what keeps distinct ranges that happen to share a
/// corner tracked separately. A bucket is never left empty inside its corner
/// index: [`RangeBucket::delete`] and [`RangeBucket::delete_range`] report
/// when the last sub-entry disappears so the owning index can drop the whole
/// entry.
pub(crate) struct RangeBucket<R: CornerRole, V> {
    values: BTreeMap<R::SecondaryKey, HashSet<V>>,
}

impl<R: CornerRole, V> RangeBucket<R, V>
where
    V: Clone + Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Values recorded against the range whose other corner is `other`.
    pub(crate) fn load(&self, other: Coord) -> Option<&HashSet<V>> {
        self.values.get(&R::secondary_key(other))
    }

    /// Insert `value` under `other`, creating the sub-entry if absent.
    ///
    /// Returns false if the exact association already existed.
    pub(crate) fn add(&mut self, other: Coord, value: V) -> bool {
        self.values
            .entry(R::secondary_key(other))
            .or_default()
            .insert(value)
    }

    /// Swap `old_value` for `new_value` under `other`.
    ///
    /// Returns false (and changes nothing) unless `old_value` is currently
    /// present in that sub-entry.
    pub(crate) fn replace(&mut self, other: Coord, new_value: V, old_value: &V) -> bool {
        let Some(set) = self.values.get_mut(&R::secondary_key(other)) else {
            return false;
        };
        if !set.remove(old_value) {
            return false;
        }
        set.insert(new_value);
        true
    }

    /// Remove `value` from the sub-entry for `other`, dropping the sub-entry
    /// if it becomes empty.
    ///
    /// Returns `(removed, bucket_now_empty)`; the second flag tells the
    /// owning index to drop this bucket entirely.
    pub(crate) fn delete(&mut self, other: Coord, value: &V) -> (bool, bool) {
        let key = R::secondary_key(other);
        let mut removed = false;
        if let Some(set) = self.values.get_mut(&key) {
            removed = set.remove(value);
            if set.is_empty() {
                self.values.remove(&key);
            }
        }
        (removed, self.values.is_empty())
    }

    /// Remove the whole sub-entry for `other` in one step.
    ///
    /// Returns `(values_removed, bucket_now_empty)`.
    pub(crate) fn delete_range(&mut self, other: Coord) -> (usize, bool) {
        let removed = self
            .values
            .remove(&R::secondary_key(other))
            .map_or(0, |set| set.len());
        (removed, self.values.is_empty())
    }

    /// Total number of (range, value) associations in this bucket.
    pub(crate) fn count(&self) -> usize {
        self.values.values().map(HashSet::len).sum()
    }

    /// Visit every sub-entry whose other corner sorts at or before `through`
    /// in this bucket's secondary order.
    ///
    /// This is the inner half of the point-containment walk: sub-entries
    /// strictly after the bound cannot belong to a range containing the query
    /// coordinate, so the scan stops there.
    pub(crate) fn scan_through(
        &self,
        through: Coord,
    ) -> impl Iterator<Item = (Coord, &HashSet<V>)> {
        self.values
            .range(..=R::secondary_key(through))
            .map(|(key, set)| (R::secondary_coord(*key), set))
    }
}
