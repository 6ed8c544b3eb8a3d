use super::super::attack_tables::KING_STEPS;
use super::super::{Board, Player, Square, SquareSet};
use super::TargetRule;

impl Board {
    /// One square in any direction; no castling.
    pub(crate) fn king_targets(&self, from: Square, player: Player) -> SquareSet {
        self.step_targets(player, KING_STEPS[from.as_index()], TargetRule::ANY)
    }
}
