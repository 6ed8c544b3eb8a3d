use super::super::attack_tables::{Direction, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use super::super::{Board, Player, Square, SquareSet};
use super::TargetRule;

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [Direction] {
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl Board {
    pub(crate) fn slider_targets(&self, from: Square, player: Player, slider: SliderType) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &dir in slider.directions() {
            let hit = self.cast_ray(from, dir);
            targets = targets.union(hit.empty);
            if let Some((blocker, _)) = hit.blocker {
                if self.accepts(player, blocker, TargetRule::CAPTURE) {
                    targets.insert(blocker);
                }
            }
        }
        targets
    }
}
