//! Board configuration.
//!
//! The board size is chosen once at game start and shared by every state
//! derived from the initial position.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::moves::Cell;

/// Smallest supported dimension.
pub const MIN_DIMENSION: u8 = 2;

/// Largest supported dimension.
pub const MAX_DIMENSION: u8 = 16;

/// Board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows. Side A starts on row 0, side B on `rows - 1`.
    pub rows: u8,

    /// Number of columns. Each side starts with one pawn per column.
    pub cols: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 4, cols: 4 }
    }
}

impl BoardConfig {
    /// Create a validated configuration.
    pub fn new(rows: u8, cols: u8) -> Result<Self> {
        let config = Self { rows, cols };
        config.validate()?;
        Ok(config)
    }

    /// Check that both dimensions are in range.
    pub fn validate(&self) -> Result<()> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if range.contains(&self.rows) && range.contains(&self.cols) {
            Ok(())
        } else {
            Err(Error::InvalidBoardSize {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Check if a cell lies on the board.
    #[inline]
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// Column-major index of a cell (the canonical key order).
    #[inline]
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.col as usize * self.rows as usize + cell.row as usize
    }

    /// All cells in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let rows = self.rows;
        (0..self.cols).flat_map(move |col| (0..rows).map(move |row| Cell::new(col, row)))
    }
}
