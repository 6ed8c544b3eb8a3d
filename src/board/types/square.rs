//! Square type and utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is White's back row; both coordinates are always in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board.
    ///
    /// # Panics
    /// Panics if either coordinate is outside `0..8`.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of bounds");
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The square `(row + dr, col + dc)`, or `None` if that falls off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Get the square's index (0-63, row-major from (0, 0))
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Square {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col + b'a') as char, self.row + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or_else(|| SquareError::OutOfBounds {
            row: isize::try_from(row).unwrap_or(isize::MAX),
            col: isize::try_from(col).unwrap_or(isize::MAX),
        })
    }
}

impl TryFrom<(isize, isize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (isize, isize)) -> Result<Self, Self::Error> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square::at(row as usize, col as usize))
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row(), sq.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert_eq!(Square::new(7, 7), Some(Square::at(7, 7)));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::at(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square::at(1, 2)));
        assert_eq!(Square::at(7, 7).offset(1, 1), None);
    }

    #[test]
    fn test_try_from_reports_coordinates() {
        let err = Square::try_from((-1isize, 3isize)).unwrap_err();
        assert_eq!(err, SquareError::OutOfBounds { row: -1, col: 3 });
        assert!(Square::try_from((3usize, 9usize)).is_err());
        assert_eq!(Square::try_from((2usize, 3usize)), Ok(Square::at(2, 3)));
    }

    #[test]
    fn test_display_is_algebraic() {
        assert_eq!(Square::at(0, 0).to_string(), "a1");
        assert_eq!(Square::at(2, 3).to_string(), "d3");
    }

    #[test]
    fn test_index_roundtrip_and_order() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.as_index()), sq);
        }
        assert!(Square::at(0, 7) < Square::at(1, 0));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_at_panics_off_board() {
        let _ = Square::at(8, 8);
    }

    #[test]
    fn test_try_from_reports_huge_coordinates_saturated() {
        assert_eq!(
            Square::try_from((usize::MAX, 3usize)),
            Err(SquareError::OutOfBounds {
                row: isize::MAX,
                col: 3
            })
        );
        assert_eq!(
            Square::try_from((8usize, 0usize)),
            Err(SquareError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_coordinate_pair() {
        let json = serde_json::to_string(&Square::at(2, 3)).unwrap();
        assert_eq!(json, "[2,3]");
        assert_eq!(serde_json::from_str::<Square>("[7,0]").unwrap(), Square::at(7, 0));
        assert!(serde_json::from_str::<Square>("[8,0]").is_err());
    }
}
