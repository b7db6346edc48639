use thiserror::Error;

/// Errors raised by store operations.
///
/// Absent data is never an error: removals and replaces of values that were
/// never recorded are no-ops reported through their return values. The only
/// runtime rejection left is mutating through a read-only view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store is read-only")]
    ReadOnly,
}
