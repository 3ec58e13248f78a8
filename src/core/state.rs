//! Board state and canonical keys.
//!
//! ## BoardState
//!
//! A snapshot of piece positions on a fixed-size board. States are
//! immutable in intent: the rules engine derives new states from working
//! copies and never mutates a state that is already stored in a search graph.
//!
//! ## CanonicalKey
//!
//! One symbol per cell, scanned column by column (`w` for side A, `b` for
//! side B, `_` for empty). Equal keys mean equal positions, whatever order the
//! pieces are stored in. `BoardState` equality and hashing go through the key.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

use super::config::BoardConfig;
use super::moves::{Cell, Move};
use super::side::Side;

/// Empty-cell symbol in canonical keys.
pub const EMPTY_SYMBOL: char = '_';

/// A pawn on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub col: u8,
    pub row: u8,
    pub side: Side,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(col: u8, row: u8, side: Side) -> Self {
        Self { col, row, side }
    }

    /// The cell this piece occupies.
    #[inline]
    #[must_use]
    pub const fn cell(&self) -> Cell {
        Cell::new(self.col, self.row)
    }
}

/// Order-independent encoding of a position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Encode a set of pieces on a board of the given size.
    fn encode(config: &BoardConfig, pieces: &[Piece]) -> Self {
        let mut symbols = vec![EMPTY_SYMBOL; config.cell_count()];
        for piece in pieces {
            symbols[config.index_of(piece.cell())] = piece.side.symbol();
        }
        Self(symbols.into_iter().collect())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A board position.
///
/// ## Example
///
/// ```
/// use rust_pawns::core::{BoardConfig, BoardState, Piece, Side};
///
/// let config = BoardConfig::default();
/// let a = BoardState::new(config, [Piece::new(0, 0, Side::A), Piece::new(1, 3, Side::B)]).unwrap();
/// let b = BoardState::new(config, [Piece::new(1, 3, Side::B), Piece::new(0, 0, Side::A)]).unwrap();
///
/// // Piece order does not matter.
/// assert_eq!(a.key(), b.key());
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawBoardState", into = "RawBoardState")]
pub struct BoardState {
    /// Board dimensions.
    config: BoardConfig,

    /// Pieces in enumeration order. Move generation follows this order.
    /// SmallVec keeps boards up to 8 columns off the heap.
    pieces: SmallVec<[Piece; 16]>,

    /// Derived canonical key, refreshed after every change.
    key: CanonicalKey,
}

impl BoardState {
    /// Create a state from an arbitrary piece list.
    ///
    /// Fails if a piece is off the board or two pieces share a cell.
    pub fn new(config: BoardConfig, pieces: impl IntoIterator<Item = Piece>) -> Result<Self> {
        config.validate()?;

        let pieces: SmallVec<[Piece; 16]> = pieces.into_iter().collect();
        let mut seen = vec![false; config.cell_count()];

        for piece in &pieces {
            let cell = piece.cell();
            if !config.contains(cell) {
                return Err(Error::OutOfBounds {
                    cell,
                    rows: config.rows,
                    cols: config.cols,
                });
            }
            let idx = config.index_of(cell);
            if seen[idx] {
                return Err(Error::DuplicateOccupant { cell });
            }
            seen[idx] = true;
        }

        let key = CanonicalKey::encode(&config, &pieces);
        Ok(Self { config, pieces, key })
    }

    /// The standard starting position: one pawn per column on each home row.
    ///
    /// Pieces are enumerated column by column, side A before side B.
    /// Fails on an invalid board size.
    pub fn initial(config: BoardConfig) -> Result<Self> {
        config.validate()?;

        let mut pieces = SmallVec::new();
        for col in 0..config.cols {
            pieces.push(Piece::new(col, Side::A.home_row(config.rows), Side::A));
            pieces.push(Piece::new(col, Side::B.home_row(config.rows), Side::B));
        }
        let key = CanonicalKey::encode(&config, &pieces);
        Ok(Self { config, pieces, key })
    }

    /// Board dimensions.
    #[inline]
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.config.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.config.cols
    }

    /// All pieces in enumeration order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces belonging to one side, in enumeration order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.side == side)
    }

    /// Number of pieces a side has left.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    /// The canonical key of this position.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    /// The side occupying a cell, if any.
    #[must_use]
    pub fn occupant(&self, cell: Cell) -> Option<Side> {
        self.position_of(cell).map(|i| self.pieces[i].side)
    }

    /// Check if a cell is empty.
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.position_of(cell).is_none()
    }

    fn position_of(&self, cell: Cell) -> Option<usize> {
        self.pieces.iter().position(|p| p.cell() == cell)
    }

    /// Relocate a piece in place, removing whatever stands on the destination
    /// first if the move is diagonal.
    ///
    /// Only the rules engine calls this, on a working copy.
    pub(crate) fn move_piece(&mut self, mv: &Move) -> Result<()> {
        if !self.config.contains(mv.to) {
            return Err(Error::OutOfBounds {
                cell: mv.to,
                rows: self.config.rows,
                cols: self.config.cols,
            });
        }
        if self.is_empty(mv.from) {
            return Err(Error::EmptySource { cell: mv.from });
        }

        if mv.is_diagonal() {
            if let Some(captured) = self.position_of(mv.to) {
                // `remove` keeps the enumeration order of the survivors.
                self.pieces.remove(captured);
            }
        }

        let mover = self
            .position_of(mv.from)
            .ok_or(Error::EmptySource { cell: mv.from })?;
        self.pieces[mover].col = mv.to.col;
        self.pieces[mover].row = mv.to.row;

        self.key = CanonicalKey::encode(&self.config, &self.pieces);
        Ok(())
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.key == other.key
    }
}

impl Eq for BoardState {}

impl std::hash::Hash for BoardState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.config.hash(state);
        self.key.hash(state);
    }
}

/// Renders one line per row, row 0 first; `.` marks an empty cell.
impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let symbol = self
                    .occupant(Cell::new(col, row))
                    .map_or('.', Side::symbol);
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized form: the key is derived, so only dimensions and pieces travel.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawBoardState {
    config: BoardConfig,
    pieces: Vec<Piece>,
}

impl TryFrom<RawBoardState> for BoardState {
    type Error = Error;

    fn try_from(raw: RawBoardState) -> Result<Self> {
        BoardState::new(raw.config, raw.pieces)
    }
}

impl From<BoardState> for RawBoardState {
    fn from(state: BoardState) -> Self {
        Self {
            config: state.config,
            pieces: state.pieces.into_vec(),
        }
    }
}
