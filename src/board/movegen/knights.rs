use super::super::attack_tables::KNIGHT_STEPS;
use super::super::{Board, Player, Square, SquareSet};
use super::TargetRule;

impl Board {
    pub(crate) fn knight_targets(&self, from: Square, player: Player) -> SquareSet {
        self.step_targets(player, KNIGHT_STEPS[from.as_index()], TargetRule::ANY)
    }
}
