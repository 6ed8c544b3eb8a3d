//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Player, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::at(0, 4), Player::White, PieceKind::King)
//!     .piece(Square::at(7, 4), Player::Black, PieceKind::King)
//!     .moved_piece(Square::at(3, 0), Player::White, PieceKind::Pawn)
//!     .build();
//! assert!(board.get_piece(Square::at(3, 0)).unwrap().has_moved());
//! ```

use super::{Board, Piece, PieceKind, Player, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Place a fresh, unmoved piece.
    #[must_use]
    pub fn piece(self, square: Square, player: Player, kind: PieceKind) -> Self {
        self.place(square, Piece::new(player, kind))
    }

    /// Place a fresh piece that counts as having already moved.
    #[must_use]
    pub fn moved_piece(self, square: Square, player: Player, kind: PieceKind) -> Self {
        let mut piece = Piece::new(player, kind);
        piece.mark_moved();
        self.place(square, piece)
    }

    /// Place an existing piece entity, keeping its identity.
    #[must_use]
    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, Some(piece));
        }
        board
    }
}
