//! Chess rules core: board state, per-piece legal move generation and
//! check/checkmate detection.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Player, Square};
//!
//! let mut board = BoardBuilder::new()
//!     .piece(Square::at(0, 4), Player::White, PieceKind::King)
//!     .piece(Square::at(1, 4), Player::White, PieceKind::Pawn)
//!     .piece(Square::at(4, 4), Player::Black, PieceKind::Rook)
//!     .build();
//!
//! let pawn = board.get_piece(Square::at(1, 4)).unwrap();
//! let moves = pawn.get_available_moves(&mut board).unwrap();
//! assert_eq!(moves.len(), 2);
//! ```

#[macro_use]
mod macros;

pub mod board;
pub mod sync;

pub use board::{Board, BoardError, Piece, PieceKind, Player, Square, SquareSet};
pub use sync::SharedBoard;
