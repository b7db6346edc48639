use tabula_model::{Cell, Coord, Label, SheetId, SheetMetadata, User, UserId};

use crate::{KeyedStore, TreeRangeStore};

/// The named stores backing one sheet session.
///
/// Pure composition: the repository constructs the stores and hands them out,
/// adding no behavior of its own. Callers invoke store operations directly on
/// the fields.
pub struct StoreRepository {
    /// Cell payloads keyed by coordinate.
    pub cells: KeyedStore<Coord, Cell>,
    /// Named range labels keyed by label name.
    pub labels: KeyedStore<String, Label>,
    /// Users keyed by id.
    pub users: KeyedStore<UserId, User>,
    /// Sheet metadata keyed by sheet id.
    pub metadata: KeyedStore<SheetId, SheetMetadata>,
    /// Ranges mapped to the cells recorded against them, with stabbing
    /// lookups.
    pub range_to_cells: TreeRangeStore<Coord>,
}

impl StoreRepository {
    /// Create a repository of empty stores.
    pub fn new() -> Self {
        Self {
            cells: KeyedStore::new(),
            labels: KeyedStore::new(),
            users: KeyedStore::new(),
            metadata: KeyedStore::new(),
            range_to_cells: TreeRangeStore::new(),
        }
    }
}

impl Default for StoreRepository {
    fn default() -> Self {
        Self::new()
    }
}
