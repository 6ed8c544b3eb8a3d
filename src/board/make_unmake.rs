//! Move application and the trial-move undo record.

use super::{Board, BoardError, Piece, Square};

/// Undo record for a trial move.
///
/// Holds the prior contents of the two touched squares and puts them back
/// when dropped, so the board is restored on every exit path, unwinding
/// included. While the trial is alive the board is only reachable through
/// [`TrialMove::board`].
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    mover: Option<Piece>,
    displaced: Option<Piece>,
}

impl<'a> TrialMove<'a> {
    pub(crate) fn apply(board: &'a mut Board, from: Square, to: Square) -> Self {
        debug_assert_ne!(from, to, "trial move to the origin square");
        let mover = board.replace(from, None);
        let displaced = board.replace(to, mover);
        TrialMove {
            board,
            from,
            to,
            mover,
            displaced,
        }
    }

    /// The board with the trial move applied.
    pub(crate) fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.replace(self.to, self.displaced.take());
        self.board.replace(self.from, self.mover.take());
    }
}

impl Board {
    /// Evaluate `f` on the position after moving the occupant of `from` to `to`.
    ///
    /// The move is undone before this returns (or unwinds), whatever `f` does.
    /// No legality check is made and `moved` flags are left alone.
    pub fn probe<R>(&mut self, from: Square, to: Square, f: impl FnOnce(&Board) -> R) -> R {
        let trial = TrialMove::apply(self, from, to);
        f(trial.board())
    }

    /// Relocate `piece` to `to`, capturing any occupant, and mark it moved.
    ///
    /// Performs no legality check; pass only destinations returned by
    /// [`Board::available_moves`].
    ///
    /// # Errors
    /// `BoardError::PieceNotFound` if the piece is not on the board.
    pub fn apply_move(&mut self, piece: &Piece, to: Square) -> Result<Option<Piece>, BoardError> {
        let from = self.find_piece(piece)?;
        let mut mover = self.remove_piece(from);
        if let Some(p) = mover.as_mut() {
            p.mark_moved();
        }
        let captured = self.replace(to, mover);
        trace_log!(
            "moved {piece} {from}->{to}{}",
            captured.map_or(String::new(), |c| format!(" capturing {c}"))
        );
        Ok(captured)
    }
}

impl Piece {
    /// Move this piece to `to` on `board`; see [`Board::apply_move`].
    ///
    /// Sets `moved` on both this handle and the board's copy and returns the
    /// captured piece, if any.
    ///
    /// # Errors
    /// `BoardError::PieceNotFound` if the piece is not on the board.
    pub fn move_to(&mut self, board: &mut Board, to: Square) -> Result<Option<Piece>, BoardError> {
        let captured = board.apply_move(self, to)?;
        self.mark_moved();
        Ok(captured)
    }
}
