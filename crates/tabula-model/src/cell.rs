use serde::{Deserialize, Serialize};

/// Maximum rows per sheet (1,048,576; A1-notation compatible).
pub const GRID_MAX_ROWS: u32 = 1_048_576;

/// Maximum columns per sheet (16,384; column `XFD`).
pub const GRID_MAX_COLS: u32 = 16_384;

/// A single cell payload as held by the cell store.
///
/// Only the pieces the store layer needs are modeled: the latest display
/// text and, when the cell is computed, the formula it was computed from
/// (stored **without** a leading `=`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Latest value text for the cell.
    #[serde(default)]
    pub value: String,
    /// Formula the value was computed from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Cell {
    /// A plain (non-formula) cell holding `value`.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            formula: None,
        }
    }

    /// A computed cell holding `value` produced by `formula`.
    ///
    /// Any leading `=` is stripped, matching how formula text is stored
    /// throughout the model.
    pub fn formula(value: impl Into<String>, formula: impl Into<String>) -> Self {
        let formula = formula.into();
        let formula = formula.trim().strip_prefix('=').unwrap_or(formula.trim());
        Self {
            value: value.into(),
            formula: Some(formula.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_cell_strips_leading_equals() {
        let cell = Cell::formula("3", "=1+2");
        assert_eq!(cell.formula.as_deref(), Some("1+2"));
        assert_eq!(Cell::formula("3", "1+2"), cell);
    }
}
