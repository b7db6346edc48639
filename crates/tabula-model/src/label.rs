use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Range;

/// Maximum length of a label name in characters.
pub const LABEL_MAX_LEN: usize = 255;

/// A named range label, keyed in the label store by its name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// User-visible label name.
    pub name: String,
    /// Range the label refers to.
    pub range: Range,
}

impl Label {
    /// Construct a validated label.
    pub fn new(name: impl Into<String>, range: Range) -> Result<Self, LabelNameError> {
        let name = name.into();
        let name = name.trim().to_string();
        validate_label_name(&name)?;
        Ok(Self { name, range })
    }
}

/// Validation errors for label names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LabelNameError {
    #[error("label name cannot be empty")]
    Empty,
    #[error("label name is too long ({len} > {max})")]
    TooLong { len: usize, max: usize },
    #[error("invalid first character '{0}' (must start with a letter or '_')")]
    InvalidStartCharacter(char),
    #[error("invalid character '{ch}' at index {index}")]
    InvalidCharacter { ch: char, index: usize },
}

/// Validate a label name: non-empty, bounded length, starts with a letter or
/// `_`, continues with letters, digits, `_` or `.`.
pub fn validate_label_name(name: &str) -> Result<(), LabelNameError> {
    if name.is_empty() {
        return Err(LabelNameError::Empty);
    }
    let len = name.chars().count();
    if len > LABEL_MAX_LEN {
        return Err(LabelNameError::TooLong {
            len,
            max: LABEL_MAX_LEN,
        });
    }

    for (index, ch) in name.chars().enumerate() {
        if index == 0 {
            if !(ch.is_alphabetic() || ch == '_') {
                return Err(LabelNameError::InvalidStartCharacter(ch));
            }
            continue;
        }
        if !(ch.is_alphanumeric() || ch == '_' || ch == '.') {
            return Err(LabelNameError::InvalidCharacter { ch, index });
        }
    }
    Ok(())
}
