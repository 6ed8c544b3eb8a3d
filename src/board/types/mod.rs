//! Core board types.
//!
//! - `Player`, `PieceKind` and `Piece` - sides, piece variants and piece entities
//! - `Square` - bounds-checked board coordinate
//! - `SquareSet` - 64-bit set of squares, the result type of move generation

mod piece;
mod square;
mod square_set;

pub use piece::{Piece, PieceId, PieceKind, Player};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
