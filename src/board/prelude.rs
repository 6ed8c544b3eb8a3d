//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{Board, BoardBuilder, BoardError, Piece, PieceKind, Player, Square, SquareSet};
