//! Step tables and ray walking shared by move generation and attack detection.

use once_cell::sync::Lazy;

use super::{Board, Piece, Square, SquareSet};

pub(crate) type Direction = (isize, isize);

pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const ORTHOGONAL: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ALL_DIRECTIONS: [Direction; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn step_table(offsets: &[Direction]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for sq in Square::all() {
        table[sq.as_index()] = offsets
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(dr, dc))
            .collect();
    }
    table
}

/// On-board knight destinations per square.
pub(crate) static KNIGHT_STEPS: Lazy<[SquareSet; 64]> = Lazy::new(|| step_table(&KNIGHT_OFFSETS));

/// On-board king destinations per square.
pub(crate) static KING_STEPS: Lazy<[SquareSet; 64]> = Lazy::new(|| step_table(&ALL_DIRECTIONS));

/// Result of walking one ray outward from an origin.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RayHit {
    /// Empty squares passed over, excluding the origin.
    pub(crate) empty: SquareSet,
    /// First occupied square on the ray, if the ray did not run off the board.
    pub(crate) blocker: Option<(Square, Piece)>,
}

impl Board {
    /// Walk from `from` in direction `dir` until the first occupied square or the edge.
    ///
    /// This is the single definition of line obstruction for both sliders and
    /// the attack detector.
    pub(crate) fn cast_ray(&self, from: Square, dir: Direction) -> RayHit {
        let mut empty = SquareSet::EMPTY;
        let mut current = from;
        while let Some(next) = current.offset(dir.0, dir.1) {
            if let Some(piece) = self.get_piece(next) {
                return RayHit {
                    empty,
                    blocker: Some((next, piece)),
                };
            }
            empty.insert(next);
            current = next;
        }
        RayHit {
            empty,
            blocker: None,
        }
    }
}
