//! `tabula-store` holds the in-memory stores behind a sheet session.
//!
//! The centerpiece is the range store ([`TreeRangeStore`]): a dual corner
//! index over rectangular ranges that answers exact-range lookups,
//! point-containment ("stabbing") queries, and per-value mutation while
//! keeping both indexes consistent. The remaining named stores are thin
//! sorted maps ([`KeyedStore`]) composed by [`StoreRepository`].
//!
//! Everything is process-local and synchronous; callers provide external
//! synchronization (see `TreeRangeStore` docs).

mod error;
mod keyed;
mod range;
mod repository;

pub use error::StoreError;
pub use keyed::KeyedStore;
pub use range::{RangeStore, ReadOnlyRangeStore, TreeRangeStore};
pub use repository::StoreRepository;
