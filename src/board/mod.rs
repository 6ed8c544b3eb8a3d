//! Board representation and rules.
//!
//! A `Board` is an 8x8 grid of optional `Piece`s. Pieces generate their
//! geometric moves, and a legality filter drops any candidate that would leave
//! the mover's own king attacked. Checkmate is derived from the two.
//!
//! No castling, en passant or promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Piece, Player, Square};
//!
//! let mut board = Board::empty();
//! let king = Piece::king(Player::White);
//! board.set_piece(Square::at(2, 3), Some(king));
//! board.set_piece(Square::at(1, 2), Some(Piece::queen(Player::Black)));
//!
//! assert!(board.is_in_check(Player::White));
//! let moves = king.get_available_moves(&mut board).unwrap();
//! assert_eq!(moves.len(), 3);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, SquareError};
pub use state::Board;
pub use types::{Piece, PieceId, PieceKind, Player, Square, SquareSet, SquareSetIter};
