//! `tabula-model` defines the grid value types shared by the Tabula stores.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the in-memory store layer (`tabula-store`: range index, keyed stores)
//! - API boundaries via `serde` (JSON-safe schema)

mod address;
mod cell;
mod label;
mod metadata;
mod user;

pub use address::{A1ParseError, CellIter, Coord, Range, RangeParseError};
pub use cell::{Cell, GRID_MAX_COLS, GRID_MAX_ROWS};
pub use label::{validate_label_name, Label, LabelNameError, LABEL_MAX_LEN};
pub use metadata::{SheetId, SheetMetadata, TimestampMs};
pub use user::{User, UserId};
