use std::collections::HashSet;
use std::hash::Hash;

use tabula_model::{Coord, Range};

use super::store::{RangeStore, TreeRangeStore};
use crate::StoreError;

/// Read-only view over a [`TreeRangeStore`].
///
/// Exposes the query half of [`RangeStore`]; every mutating call returns
/// [`StoreError::ReadOnly`] without touching any state. Used to hand the
/// index to components that must not mutate it while keeping the shared
/// store trait surface.
pub struct ReadOnlyRangeStore<'a, V> {
    inner: &'a TreeRangeStore<V>,
}

impl<'a, V> ReadOnlyRangeStore<'a, V> {
    pub(crate) fn new(inner: &'a TreeRangeStore<V>) -> Self {
        Self { inner }
    }
}

impl<V> RangeStore<V> for ReadOnlyRangeStore<'_, V>
where
    V: Clone + Eq + Hash,
{
    fn load_exact(&self, range: Range) -> Vec<V> {
        self.inner.load_exact(range)
    }

    fn ranges_containing(&self, coord: Coord) -> HashSet<Range> {
        self.inner.ranges_containing(coord)
    }

    fn values_containing(&self, coord: Coord) -> HashSet<V> {
        self.inner.values_containing(coord)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn add_value(&mut self, _range: Range, _value: V) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly)
    }

    fn replace_value(
        &mut self,
        _range: Range,
        _new_value: V,
        _old_value: V,
    ) -> Result<bool, StoreError> {
        Err(StoreError::ReadOnly)
    }

    fn remove_value(&mut self, _range: Range, _value: V) -> Result<bool, StoreError> {
        Err(StoreError::ReadOnly)
    }

    fn delete(&mut self, _range: Range) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly)
    }
}
