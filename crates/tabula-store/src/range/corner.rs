use std::cmp::Reverse;

use tabula_model::{Coord, Range};

/// Strategy for one corner role of the range index.
///
/// The by-begin index keys buckets by each range's begin corner in natural
/// row-major order; the by-end index keys by the end corner in reversed
/// order. Within a bucket the *other* corner is sorted in the opposite
/// direction of the bucket's own index. The effect is that at both levels a
/// point query is a single inclusive prefix scan (`..= key(query)`): corners
/// that could belong to a containing range sort at or before the query
/// coordinate, corners that provably cannot sort strictly after it.
pub(crate) trait CornerRole {
    /// Ordered key for the corner this role indexes by.
    type PrimaryKey: Ord + Copy;
    /// Ordered key for the opposite corner inside a bucket.
    type SecondaryKey: Ord + Copy;

    /// The corner this role indexes by.
    fn primary(range: Range) -> Coord;

    /// The range's other corner, keyed inside the bucket.
    fn secondary(range: Range) -> Coord;

    fn primary_key(corner: Coord) -> Self::PrimaryKey;
    fn secondary_key(corner: Coord) -> Self::SecondaryKey;
    fn primary_coord(key: Self::PrimaryKey) -> Coord;
    fn secondary_coord(key: Self::SecondaryKey) -> Coord;

    /// Rebuild a range from its primary and secondary corners.
    fn range(primary: Coord, secondary: Coord) -> Range;
}

/// Indexes ranges by their begin (top-left) corner, ascending row-major.
pub(crate) enum ByBegin {}

/// Indexes ranges by their end (bottom-right) corner, descending row-major.
pub(crate) enum ByEnd {}

impl CornerRole for ByBegin {
    type PrimaryKey = Coord;
    type SecondaryKey = Reverse<Coord>;

    #[inline]
    fn primary(range: Range) -> Coord {
        range.begin
    }

    #[inline]
    fn secondary(range: Range) -> Coord {
        range.end
    }

    #[inline]
    fn primary_key(corner: Coord) -> Coord {
        corner
    }

    #[inline]
    fn secondary_key(corner: Coord) -> Reverse<Coord> {
        Reverse(corner)
    }

    #[inline]
    fn primary_coord(key: Coord) -> Coord {
        key
    }

    #[inline]
    fn secondary_coord(key: Reverse<Coord>) -> Coord {
        key.0
    }

    #[inline]
    fn range(primary: Coord, secondary: Coord) -> Range {
        Range::new(primary, secondary)
    }
}

impl CornerRole for ByEnd {
    type PrimaryKey = Reverse<Coord>;
    type SecondaryKey = Coord;

    #[inline]
    fn primary(range: Range) -> Coord {
        range.end
    }

    #[inline]
    fn secondary(range: Range) -> Coord {
        range.begin
    }

    #[inline]
    fn primary_key(corner: Coord) -> Reverse<Coord> {
        Reverse(corner)
    }

    #[inline]
    fn secondary_key(corner: Coord) -> Coord {
        corner
    }

    #[inline]
    fn primary_coord(key: Reverse<Coord>) -> Coord {
        key.0
    }

    #[inline]
    fn secondary_coord(key: Coord) -> Coord {
        key
    }

    #[inline]
    fn range(primary: Coord, secondary: Coord) -> Range {
        Range::new(secondary, primary)
    }
}
