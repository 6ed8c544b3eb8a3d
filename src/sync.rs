//! Shared access to a board from several threads.
//!
//! Move generation mutates the board for the length of each trial move, so a
//! board shared between threads must be held exclusively for a whole query.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Board, BoardError, Piece, Player, Square, SquareSet};

/// A board behind a lock; every query holds the lock from start to finish.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Legal destinations for `piece`.
    ///
    /// # Errors
    /// `BoardError::PieceNotFound` if the piece is not on the board.
    pub fn available_moves(&self, piece: &Piece) -> Result<SquareSet, BoardError> {
        self.0.lock().available_moves(piece)
    }

    #[must_use]
    pub fn is_in_check(&self, player: Player) -> bool {
        self.0.lock().is_in_check(player)
    }

    #[must_use]
    pub fn is_checkmate(&self, player: Player) -> bool {
        self.0.lock().is_checkmate(player)
    }

    /// Apply a move; see [`Piece::move_to`].
    ///
    /// # Errors
    /// `BoardError::PieceNotFound` if the piece is not on the board.
    pub fn move_to(&self, piece: &mut Piece, to: Square) -> Result<Option<Piece>, BoardError> {
        piece.move_to(&mut self.0.lock(), to)
    }

    /// Run `f` with exclusive access to the board.
    pub fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// A copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().clone()
    }
}
