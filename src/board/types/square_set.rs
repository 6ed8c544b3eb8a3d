//! Set of squares backed by a 64-bit mask.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A set of board squares, one bit per square (bit `row * 8 + col`).
///
/// Iteration yields squares in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Create a set with a single square
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u64 << sq.as_index())
    }

    /// Raw bit representation
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.as_index()) != 0
    }

    /// Add a square; returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, sq: Square) -> bool {
        let bit = 1u64 << sq.as_index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Remove a square; returns true if it was present.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> bool {
        let bit = 1u64 << sq.as_index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        SquareSet(self.0 | other.0)
    }

    /// Returns an iterator over the squares in this set
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|sq| (sq.row(), sq.col())))
            .finish()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over squares in a `SquareSet`
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(Square::from_index(idx))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.insert(Square::at(2, 3)));
        assert!(!set.insert(Square::at(2, 3)));
        assert!(set.contains(Square::at(2, 3)));
        assert_eq!(set.len(), 1);
        assert!(set.remove(Square::at(2, 3)));
        assert!(!set.remove(Square::at(2, 3)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_is_row_major() {
        let set: SquareSet = [Square::at(5, 1), Square::at(0, 7), Square::at(5, 0)]
            .into_iter()
            .collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(
            squares,
            vec![Square::at(0, 7), Square::at(5, 0), Square::at(5, 1)]
        );
    }

    #[test]
    fn test_corner_squares_use_full_width() {
        let set: SquareSet = [Square::at(0, 0), Square::at(7, 7)].into_iter().collect();
        assert_eq!(set.bits(), 1u64 | (1u64 << 63));
        assert_eq!(set.iter().len(), 2);
    }

    #[test]
    fn test_debug_lists_coordinates() {
        let set = SquareSet::from_square(Square::at(1, 4));
        assert_eq!(format!("{set:?}"), "{(1, 4)}");
    }
}
