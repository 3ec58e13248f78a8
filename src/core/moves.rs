//! Cell coordinates and moves.
//!
//! A move is a (source cell, destination cell) pair. The rules engine never
//! stores which piece moved: pieces have no identity beyond position and side.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// A board coordinate. Columns and rows are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Offset this cell, returning `None` if either coordinate goes negative.
    ///
    /// The upper bound is the board's concern, not the cell's.
    #[must_use]
    pub fn offset(self, dcol: i16, drow: i16) -> Option<Self> {
        let col = u8::try_from(i16::from(self.col) + dcol).ok()?;
        let row = u8::try_from(i16::from(self.row) + drow).ok()?;
        Some(Self { col, row })
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A single pawn move.
///
/// ## Example
///
/// ```
/// use rust_pawns::core::{Cell, Move};
///
/// let step = Move::new(Cell::new(1, 0), Cell::new(1, 1));
/// assert!(!step.is_diagonal());
///
/// let capture = Move::new(Cell::new(1, 0), Cell::new(2, 1));
/// assert!(capture.is_diagonal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// Diagonal moves are captures.
    #[inline]
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.from.col != self.to.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A move played during a match, for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The move played.
    pub mv: Move,

    /// Ply number (0-based) at which the move was played.
    pub ply: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, mv: Move, ply: u32) -> Self {
        Self { side, mv, ply }
    }
}
