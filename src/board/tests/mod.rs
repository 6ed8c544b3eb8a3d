//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pieces.rs` - Per-piece move geometry
//! - `check.rs` - Attack detection and check
//! - `legality.rs` - Moves that would expose the mover's own king
//! - `checkmate.rs` - Checkmate and stalemate
//! - `make_unmake.rs` - Trial-move restore and move application
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Piece, Player, Square, SquareSet};

pub(super) fn squares(coords: &[(usize, usize)]) -> SquareSet {
    coords.iter().map(|&(r, c)| Square::at(r, c)).collect()
}

/// Place a fresh piece and return its handle.
pub(super) fn put(board: &mut Board, row: usize, col: usize, piece: Piece) -> Piece {
    board.set_piece(Square::at(row, col), Some(piece));
    piece
}

pub(super) fn moves(board: &mut Board, piece: &Piece) -> SquareSet {
    piece
        .get_available_moves(board)
        .expect("piece should be on the board")
}

pub(super) const WHITE: Player = Player::White;
pub(super) const BLACK: Player = Player::Black;
