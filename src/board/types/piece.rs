//! Player, piece kind and piece entity types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both players in index order (White=0, Black=1)
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    /// Returns the opponent
    #[inline]
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Pawn forward direction along rows (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Piece variants; the variant alone decides move geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns true if this piece can attack diagonally (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    /// Returns true if this piece can attack along rows/columns (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if this piece is a slider (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

static NEXT_PIECE_ID: AtomicU32 = AtomicU32::new(1);

/// Stable identity of a piece entity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(u32);

impl PieceId {
    fn next() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece entity.
///
/// Copies of a `Piece` share its [`PieceId`]; the copy stored on a
/// [`Board`](crate::board::Board) is authoritative for the `moved` flag.
/// Equality and hashing go by identity only, so a piece equals itself
/// before and after it moves.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    id: PieceId,
    player: Player,
    kind: PieceKind,
    moved: bool,
}

impl Piece {
    /// Create a fresh, unmoved piece with a new identity.
    #[must_use]
    pub fn new(player: Player, kind: PieceKind) -> Self {
        Piece {
            id: PieceId::next(),
            player,
            kind,
            moved: false,
        }
    }

    #[must_use]
    pub fn pawn(player: Player) -> Self {
        Piece::new(player, PieceKind::Pawn)
    }

    #[must_use]
    pub fn knight(player: Player) -> Self {
        Piece::new(player, PieceKind::Knight)
    }

    #[must_use]
    pub fn bishop(player: Player) -> Self {
        Piece::new(player, PieceKind::Bishop)
    }

    #[must_use]
    pub fn rook(player: Player) -> Self {
        Piece::new(player, PieceKind::Rook)
    }

    #[must_use]
    pub fn queen(player: Player) -> Self {
        Piece::new(player, PieceKind::Queen)
    }

    #[must_use]
    pub fn king(player: Player) -> Self {
        Piece::new(player, PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// True once the piece has completed a move.
    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    #[inline]
    #[must_use]
    pub(crate) fn is(&self, player: Player, kind: PieceKind) -> bool {
        self.player == player && self.kind == kind
    }

    pub(crate) fn mark_moved(&mut self) {
        self.moved = true;
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.player, self.kind, self.id)
    }
}
