//! The range store: rectangular ranges mapped to sets of values, indexed for
//! exact-range and point-containment lookups.
//!
//! Layout mirrors the structure of the index itself:
//! - `corner`: the two corner-role strategies (by-begin ascending, by-end
//!   descending) shared by both index levels
//! - `bucket`: per-corner nested map from the range's other corner to its
//!   value set
//! - `index`: sorted corner-to-bucket map with the no-empty-bucket invariant
//! - `store`: the public facade driving both indexes in lock-step
//! - `readonly`: mutation-rejecting view

mod bucket;
mod corner;
mod index;
mod readonly;
mod store;

pub use readonly::ReadOnlyRangeStore;
pub use store::{RangeStore, TreeRangeStore};
