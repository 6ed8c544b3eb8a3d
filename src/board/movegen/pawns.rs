use super::super::{Board, Piece, Square, SquareSet};
use super::TargetRule;

impl Board {
    pub(crate) fn pawn_targets(&self, from: Square, pawn: &Piece) -> SquareSet {
        let player = pawn.player();
        let dir = player.forward();
        let mut targets = SquareSet::EMPTY;

        if let Some(single) = from.offset(dir, 0) {
            if self.accepts(player, single, TargetRule::QUIET) {
                targets.insert(single);
                // Double step only past an empty single-step square.
                if !pawn.has_moved() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.accepts(player, double, TargetRule::QUIET) {
                            targets.insert(double);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(diagonal) = from.offset(dir, dc) {
                if self.accepts(player, diagonal, TargetRule::CAPTURE) {
                    targets.insert(diagonal);
                }
            }
        }

        targets
    }
}
