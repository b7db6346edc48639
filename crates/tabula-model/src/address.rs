use core::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::{GRID_MAX_COLS, GRID_MAX_ROWS};

/// A single grid position within a sheet.
///
/// Rows and columns are **0-indexed**: `row = 0` is A1-notation row `1`,
/// `col = 0` is column `A`.
///
/// The derived [`Ord`] is row-major (row first, then column); the range index
/// relies on this ordering for its by-begin corner walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// 0-indexed row.
    pub row: u32,
    /// 0-indexed column.
    pub col: u32,
}

impl Coord {
    /// Construct a new [`Coord`].
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Convert to A1 notation (e.g. `A1`, `BC32`).
    pub fn to_a1(self) -> String {
        format!("{}{}", col_to_letters(self.col), self.row + 1)
    }

    /// Parse an A1-style reference (e.g. `A1`, `$B$2`).
    pub fn from_a1(a1: &str) -> Result<Self, A1ParseError> {
        let trimmed = a1.trim();
        if trimmed.is_empty() {
            return Err(A1ParseError::Empty);
        }

        let rest = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let letters_end = rest
            .bytes()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if letters_end == 0 {
            return Err(A1ParseError::MissingColumn);
        }
        let (letters, rest) = rest.split_at(letters_end);
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() {
            return Err(A1ParseError::MissingRow);
        }
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(A1ParseError::TrailingCharacters);
        }

        let col = letters_to_col(letters)?;
        if col >= GRID_MAX_COLS {
            return Err(A1ParseError::InvalidColumn);
        }
        let row_1_based: u32 = rest.parse().map_err(|_| A1ParseError::InvalidRow)?;
        if row_1_based == 0 || row_1_based > GRID_MAX_ROWS {
            return Err(A1ParseError::InvalidRow);
        }

        Ok(Self::new(row_1_based - 1, col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// An inclusive rectangular region within a sheet.
///
/// Always normalized such that `begin.row <= end.row` and
/// `begin.col <= end.col` (begin is top-left, end is bottom-right).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Range {
    pub begin: Coord,
    pub end: Coord,
}

impl Range {
    /// Construct a new range, normalizing corners if needed.
    pub const fn new(a: Coord, b: Coord) -> Self {
        let (begin_row, end_row) = if a.row <= b.row {
            (a.row, b.row)
        } else {
            (b.row, a.row)
        };
        let (begin_col, end_col) = if a.col <= b.col {
            (a.col, b.col)
        } else {
            (b.col, a.col)
        };
        Self {
            begin: Coord::new(begin_row, begin_col),
            end: Coord::new(end_row, end_col),
        }
    }

    /// A range covering exactly one cell.
    #[inline]
    pub const fn cell(coord: Coord) -> Self {
        Self {
            begin: coord,
            end: coord,
        }
    }

    /// Returns true if `coord` lies within this range (both axes inclusive).
    #[inline]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= self.begin.row
            && coord.row <= self.end.row
            && coord.col >= self.begin.col
            && coord.col <= self.end.col
    }

    /// Returns true if the two ranges share at least one cell.
    #[inline]
    pub const fn intersects(&self, other: &Range) -> bool {
        self.begin.row <= other.end.row
            && other.begin.row <= self.end.row
            && self.begin.col <= other.end.col
            && other.begin.col <= self.end.col
    }

    /// Number of columns in the range.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.end.col - self.begin.col + 1
    }

    /// Number of rows in the range.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.end.row - self.begin.row + 1
    }

    /// Returns true if the range is exactly one cell.
    #[inline]
    pub const fn is_single_cell(&self) -> bool {
        self.begin.row == self.end.row && self.begin.col == self.end.col
    }

    /// Iterate over every cell in the range, row-major.
    pub fn cells(&self) -> CellIter {
        CellIter {
            range: *self,
            next: Some(self.begin),
        }
    }

    /// Parse an A1-style range like `A1:B2` or a single-cell reference like `C3`.
    pub fn from_a1(a1: &str) -> Result<Self, RangeParseError> {
        let s = a1.trim();
        if s.is_empty() {
            return Err(RangeParseError::Empty);
        }

        match s.split_once(':') {
            None => Ok(Range::cell(Coord::from_a1(s).map_err(RangeParseError::Coord)?)),
            Some((a, b)) => {
                let begin = Coord::from_a1(a).map_err(RangeParseError::Coord)?;
                let end = Coord::from_a1(b).map_err(RangeParseError::Coord)?;
                Ok(Range::new(begin, end))
            }
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.begin)
        } else {
            write!(f, "{}:{}", self.begin, self.end)
        }
    }
}

/// Row-major iterator over the cells of a [`Range`].
#[derive(Clone, Debug)]
pub struct CellIter {
    range: Range,
    next: Option<Coord>,
}

impl Iterator for CellIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        self.next = if current.col < self.range.end.col {
            Some(Coord::new(current.row, current.col + 1))
        } else if current.row < self.range.end.row {
            Some(Coord::new(current.row + 1, self.range.begin.col))
        } else {
            None
        };
        Some(current)
    }
}

/// Errors that can occur when parsing an A1 cell reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum A1ParseError {
    #[error("empty A1 reference")]
    Empty,
    #[error("missing column in A1 reference")]
    MissingColumn,
    #[error("missing row in A1 reference")]
    MissingRow,
    #[error("invalid column in A1 reference")]
    InvalidColumn,
    #[error("invalid row in A1 reference")]
    InvalidRow,
    #[error("trailing characters in A1 reference")]
    TrailingCharacters,
}

/// Errors that can occur when parsing an A1 range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeParseError {
    #[error("empty A1 range")]
    Empty,
    #[error("invalid cell reference in range: {0}")]
    Coord(#[source] A1ParseError),
}

fn col_to_letters(col: u32) -> String {
    // A1 columns are 1-based bijective base-26; we store 0-based internally.
    let mut n = col + 1;
    let mut letters = [0u8; 8];
    let mut at = letters.len();
    while n > 0 {
        at -= 1;
        letters[at] = b'A' + ((n - 1) % 26) as u8;
        n = (n - 1) / 26;
    }
    String::from_utf8_lossy(&letters[at..]).into_owned()
}

fn letters_to_col(letters: &str) -> Result<u32, A1ParseError> {
    let mut col: u32 = 0;
    for b in letters.bytes() {
        let digit = (b.to_ascii_uppercase() - b'A') as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(digit))
            .ok_or(A1ParseError::InvalidColumn)?;
    }
    if col == 0 {
        return Err(A1ParseError::InvalidColumn);
    }
    Ok(col - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_a1_roundtrip() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.to_a1(), "A1");
        assert_eq!(Coord::from_a1("A1").unwrap(), origin);
        assert_eq!(Coord::from_a1("$A$1").unwrap(), origin);

        let bc32 = Coord::new(31, 54);
        assert_eq!(bc32.to_a1(), "BC32");
        assert_eq!(Coord::from_a1("bc32").unwrap(), bc32);
    }

    #[test]
    fn coord_order_is_row_major() {
        assert!(Coord::new(0, 5) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 3));
        assert_eq!(Coord::new(4, 4), Coord::new(4, 4));
    }

    #[test]
    fn range_normalizes_corners() {
        let r = Range::new(Coord::new(3, 4), Coord::new(1, 2));
        assert_eq!(r.begin, Coord::new(1, 2));
        assert_eq!(r.end, Coord::new(3, 4));
    }

    #[test]
    fn range_containment_is_inclusive() {
        let r = Range::from_a1("B2:D4").unwrap();
        assert!(r.contains(Coord::from_a1("B2").unwrap()));
        assert!(r.contains(Coord::from_a1("D4").unwrap()));
        assert!(r.contains(Coord::from_a1("C3").unwrap()));
        assert!(!r.contains(Coord::from_a1("A1").unwrap()));
        assert!(!r.contains(Coord::from_a1("D5").unwrap()));
        assert!(!r.contains(Coord::from_a1("E3").unwrap()));
    }

    #[test]
    fn range_cell_iteration_is_row_major() {
        let r = Range::from_a1("A1:B2").unwrap();
        let cells: Vec<String> = r.cells().map(Coord::to_a1).collect();
        assert_eq!(cells, ["A1", "B1", "A2", "B2"]);
        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 2);
    }

    #[test]
    fn a1_bounds_match_grid_limits() {
        assert!(Coord::from_a1("XFD1048576").is_ok());
        assert!(Coord::from_a1("XFE1").is_err());
        assert!(Coord::from_a1("A1048577").is_err());
        assert!(Coord::from_a1("A0").is_err());
    }
}
