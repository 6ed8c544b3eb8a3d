mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{Board, BoardError, Piece, PieceKind, Player, Square, SquareSet};

/// What a step-mover may do on a destination square.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TargetRule {
    onto_empty: bool,
    capture: bool,
}

impl TargetRule {
    pub(crate) const QUIET: TargetRule = TargetRule {
        onto_empty: true,
        capture: false,
    };
    pub(crate) const CAPTURE: TargetRule = TargetRule {
        onto_empty: false,
        capture: true,
    };
    pub(crate) const ANY: TargetRule = TargetRule {
        onto_empty: true,
        capture: true,
    };
}

impl Board {
    /// Whether a piece of `player` may land on `to` under `rule`.
    ///
    /// Own pieces always block; kings are never capture targets.
    pub(crate) fn accepts(&self, player: Player, to: Square, rule: TargetRule) -> bool {
        match self.get_piece(to) {
            None => rule.onto_empty,
            Some(occupant) if occupant.player() == player => false,
            Some(occupant) => rule.capture && occupant.kind() != PieceKind::King,
        }
    }

    pub(crate) fn step_targets(&self, player: Player, steps: SquareSet, rule: TargetRule) -> SquareSet {
        steps
            .iter()
            .filter(|&to| self.accepts(player, to, rule))
            .collect()
    }

    /// Destinations allowed by `piece`'s geometry alone, ignoring king safety.
    pub(crate) fn geometric_targets(&self, from: Square, piece: &Piece) -> SquareSet {
        let player = piece.player();
        match piece.kind() {
            PieceKind::Pawn => self.pawn_targets(from, piece),
            PieceKind::Knight => self.knight_targets(from, player),
            PieceKind::Bishop => self.slider_targets(from, player, SliderType::Bishop),
            PieceKind::Rook => self.slider_targets(from, player, SliderType::Rook),
            PieceKind::Queen => self.slider_targets(from, player, SliderType::Queen),
            PieceKind::King => self.king_targets(from, player),
        }
    }

    fn retain_legal(&mut self, from: Square, player: Player, candidates: SquareSet) -> SquareSet {
        let mut legal = SquareSet::EMPTY;
        for to in candidates {
            let exposes_king = self.probe(from, to, |board| board.is_in_check(player));
            if exposes_king {
                trace_log!("{from}->{to} rejected: leaves {player} king attacked");
            } else {
                legal.insert(to);
            }
        }
        legal
    }

    /// Legal destinations for `piece`.
    ///
    /// The board is used as scratch space for trial moves but is back in its
    /// original state when this returns.
    ///
    /// # Errors
    /// `BoardError::PieceNotFound` if the piece is not on the board.
    pub fn available_moves(&mut self, piece: &Piece) -> Result<SquareSet, BoardError> {
        let from = self.find_piece(piece)?;
        Ok(self.legal_moves_from(from))
    }

    /// Legal destinations for whatever stands on `from`; empty if the square is empty.
    pub fn legal_moves_from(&mut self, from: Square) -> SquareSet {
        let Some(piece) = self.get_piece(from) else {
            return SquareSet::EMPTY;
        };
        let candidates = self.geometric_targets(from, &piece);
        self.retain_legal(from, piece.player(), candidates)
    }

    /// Every piece of `player` that can move, with its legal destinations.
    pub fn legal_moves_for(&mut self, player: Player) -> Vec<(Square, SquareSet)> {
        let mut moves = Vec::new();
        for from in self.occupancy(player) {
            let targets = self.legal_moves_from(from);
            if !targets.is_empty() {
                moves.push((from, targets));
            }
        }
        moves
    }

    /// True if any piece of `player` has a legal move.
    pub fn has_legal_moves(&mut self, player: Player) -> bool {
        self.occupancy(player)
            .iter()
            .any(|from| !self.legal_moves_from(from).is_empty())
    }

    /// `player` is in check and no piece of theirs has a legal move.
    pub fn is_checkmate(&mut self, player: Player) -> bool {
        let mated = self.is_in_check(player) && !self.has_legal_moves(player);
        if mated {
            debug_log!("{player} is checkmated");
        }
        mated
    }

    /// `player` is not in check but has no legal move.
    pub fn is_stalemate(&mut self, player: Player) -> bool {
        !self.is_in_check(player) && !self.has_legal_moves(player)
    }
}

impl Piece {
    /// Legal destinations for this piece on `board`; see [`Board::available_moves`].
    ///
    /// # Errors
    /// `BoardError::PieceNotFound` if the piece is not on the board.
    pub fn get_available_moves(&self, board: &mut Board) -> Result<SquareSet, BoardError> {
        board.available_moves(self)
    }
}
