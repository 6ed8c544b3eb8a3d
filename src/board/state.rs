use super::error::BoardError;
use super::types::{Piece, PieceId, PieceKind, Player, Square, SquareSet};

/// An 8x8 grid holding at most one piece per square.
///
/// Two boards are equal when every square holds the same entity with the
/// same `moved` flag, or is empty on both.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares
            .iter()
            .zip(other.squares.iter())
            .all(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => a == b && a.has_moved() == b.has_moved(),
                (None, None) => true,
                _ => false,
            })
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_index()]
    }

    /// Put `piece` on `sq` (or clear it with `None`), discarding any previous occupant.
    ///
    /// The entity's old square, if any, is left alone; relocating with
    /// "place at destination, then clear origin" is allowed. Until the origin
    /// is cleared, [`Board::find_piece`] reports the first square in
    /// row-major order.
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.as_index()] = piece;
    }

    /// Clear `sq`, returning whatever stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_index()].take()
    }

    #[inline]
    pub(crate) fn replace(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.as_index()], piece)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    /// True if `sq` holds a piece of the given player and kind.
    #[inline]
    #[must_use]
    pub(crate) fn holds(&self, sq: Square, player: Player, kind: PieceKind) -> bool {
        self.get_piece(sq).is_some_and(|p| p.is(player, kind))
    }

    /// The square holding this piece entity.
    ///
    /// # Errors
    /// `BoardError::PieceNotFound` if the piece is not on the board.
    pub fn find_piece(&self, piece: &Piece) -> Result<Square, BoardError> {
        self.find_by_id(piece.id())
            .ok_or(BoardError::PieceNotFound { id: piece.id() })
    }

    fn find_by_id(&self, id: PieceId) -> Option<Square> {
        self.occupied()
            .find(|(_, p)| p.id() == id)
            .map(|(sq, _)| sq)
    }

    /// `player`'s king, if one has been placed.
    #[must_use]
    pub fn get_king(&self, player: Player) -> Option<Piece> {
        self.king_square(player)
            .and_then(|sq| self.get_piece(sq))
    }

    /// The square of `player`'s king, if one has been placed.
    #[must_use]
    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.occupied()
            .find(|(_, p)| p.is(player, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// Relocate whatever stands on `from` to `to`, returning the displaced occupant of `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mover = self.remove_piece(from);
        self.replace(to, mover)
    }

    /// All occupied squares with their pieces, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|p| (Square::from_index(idx), p)))
    }

    /// `player`'s pieces with their squares, in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.player() == player)
    }

    /// Squares occupied by `player`.
    #[must_use]
    pub fn occupancy(&self, player: Player) -> SquareSet {
        self.pieces(player).map(|(sq, _)| sq).collect()
    }
}
