//! Attack detection.
//!
//! Each attacker class is a separate predicate over the target square. Sliding
//! attacks reuse [`Board::cast_ray`], so what blocks a line here is exactly what
//! blocks a slider's move.

use super::attack_tables::{Direction, DIAGONAL, KING_STEPS, KNIGHT_STEPS, ORTHOGONAL};
use super::{Board, Piece, PieceKind, Player, Square};

impl Board {
    /// True if any piece of `attacker` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Player) -> bool {
        self.attacked_by_pawn(square, attacker)
            || self.attacked_by_knight(square, attacker)
            || self.attacked_along(square, attacker, &ORTHOGONAL, PieceKind::attacks_straight)
            || self.attacked_along(square, attacker, &DIAGONAL, PieceKind::attacks_diagonally)
            || self.attacked_by_king(square, attacker)
    }

    /// True if `player`'s king is attacked. A player with no king is never in check.
    #[must_use]
    pub fn is_in_check(&self, player: Player) -> bool {
        match self.king_square(player) {
            Some(king_sq) => self.is_square_attacked(king_sq, player.other()),
            None => false,
        }
    }

    fn attacked_by_pawn(&self, square: Square, attacker: Player) -> bool {
        // Attacking pawns sit one row behind the target, seen from their side.
        let dr = -attacker.forward();
        [-1, 1].into_iter().any(|dc| {
            square
                .offset(dr, dc)
                .is_some_and(|from| self.holds(from, attacker, PieceKind::Pawn))
        })
    }

    fn attacked_by_knight(&self, square: Square, attacker: Player) -> bool {
        KNIGHT_STEPS[square.as_index()]
            .iter()
            .any(|from| self.holds(from, attacker, PieceKind::Knight))
    }

    fn attacked_by_king(&self, square: Square, attacker: Player) -> bool {
        KING_STEPS[square.as_index()]
            .iter()
            .any(|from| self.holds(from, attacker, PieceKind::King))
    }

    fn attacked_along(
        &self,
        square: Square,
        attacker: Player,
        directions: &[Direction],
        slides: fn(PieceKind) -> bool,
    ) -> bool {
        directions.iter().any(|&dir| {
            matches!(
                self.cast_ray(square, dir).blocker,
                Some((_, piece)) if piece.player() == attacker && slides(piece.kind())
            )
        })
    }
}

impl Piece {
    /// True if this piece's owner is in check on `board`.
    #[must_use]
    pub fn is_in_check(&self, board: &Board) -> bool {
        board.is_in_check(self.player())
    }
}
