use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type TimestampMs = i64;

/// Identifier for a sheet.
pub type SheetId = u32;

/// Per-sheet metadata held by the metadata store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMetadata {
    /// User-visible sheet name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: TimestampMs,
    #[serde(default)]
    pub modified_at: TimestampMs,
}

impl SheetMetadata {
    /// Construct metadata stamped with a single creation instant.
    pub fn new(name: impl Into<String>, created_at: TimestampMs) -> Self {
        Self {
            name: name.into(),
            created_at,
            modified_at: created_at,
        }
    }
}
