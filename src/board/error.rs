//! Error types for board operations.

use std::fmt;

use super::types::PieceId;

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfBounds { row: isize, col: isize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board lookups and move application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The piece is not on the board (never placed, or captured)
    PieceNotFound { id: PieceId },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::PieceNotFound { id } => {
                write!(f, "Piece {id} is not on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}
