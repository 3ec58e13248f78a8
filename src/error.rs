//! Error types for rust-pawns.

use thiserror::Error;

use crate::core::{Cell, Side};

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("no piece at source cell {cell}")]
    EmptySource { cell: Cell },

    #[error("cell {cell} is outside a {rows}x{cols} board")]
    OutOfBounds { cell: Cell, rows: u8, cols: u8 },

    #[error("cell {cell} is occupied by more than one piece")]
    DuplicateOccupant { cell: Cell },

    #[error("invalid board size {rows}x{cols} (rows and cols must be 2-16)")]
    InvalidBoardSize { rows: u8, cols: u8 },

    #[error("search horizon {horizon} must be even so the searching side moves last")]
    OddHorizon { horizon: u32 },

    #[error("win score {score} must be positive")]
    InvalidWinScore { score: i32 },

    #[error("root position has no candidate moves to search")]
    NoCandidateMoves,

    #[error("no legal move reaches the chosen position '{key}'")]
    UnresolvedMove { key: String },

    #[error("{side} has no legal moves")]
    NoLegalMoves { side: Side },

    #[error("move index {index} is out of range for {len} legal moves")]
    InvalidMoveIndex { index: usize, len: usize },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
