//! Rules engine trait and the pawn race rules.

use smallvec::SmallVec;

use crate::core::{BoardState, CanonicalKey, Cell, Move, Piece, Side};
use crate::error::Result;

/// Moves a single pawn can make: forward plus two diagonals at most.
pub type PieceMoves = SmallVec<[Move; 3]>;

/// Rules engine trait.
///
/// The search calls these methods while building its graph and never
/// interprets the board directly.
///
/// ## Implementation Notes
///
/// - `legal_moves`: order is part of the contract; search ties break on it
/// - `apply`: must be deterministic and must not modify its input
/// - `has_won`: checked for both sides after every generated move
pub trait RulesEngine {
    /// Legal moves for one piece.
    fn legal_moves(&self, state: &BoardState, piece: &Piece) -> PieceMoves;

    /// Apply a move to a copy of the state.
    ///
    /// Legality is not checked. Moves must come from `legal_moves` or
    /// `generate_moves` for the correct side; an empty source cell is
    /// reported as an error.
    fn apply(&self, state: &BoardState, mv: &Move) -> Result<BoardState>;

    /// Check if `side` has won in this position.
    fn has_won(&self, state: &BoardState, side: Side) -> bool;

    // === Convenience Methods ===

    /// Enumerate all legal moves for a side, in piece enumeration order.
    fn generate_moves(&self, state: &BoardState, side: Side) -> Vec<Move> {
        state
            .pieces_of(side)
            .flat_map(|piece| self.legal_moves(state, piece))
            .collect()
    }

    /// Check if a side has at least one legal move.
    ///
    /// Cheaper than `generate_moves(..).is_empty()`: stops at the first hit.
    fn has_legal_move(&self, state: &BoardState, side: Side) -> bool {
        state
            .pieces_of(side)
            .any(|piece| !self.legal_moves(state, piece).is_empty())
    }

    /// The canonical key used for transposition detection.
    fn canonical_key(&self, state: &BoardState) -> CanonicalKey {
        state.key().clone()
    }

    /// The winning side, if any. Side A is checked first.
    fn winner(&self, state: &BoardState) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| self.has_won(state, side))
    }
}

/// Rules of the pawn race.
///
/// - A pawn steps one row forward onto an empty cell.
/// - A pawn captures one row forward and one column sideways onto an
///   opponent's pawn. There is no sideways or backward movement.
/// - A side wins when one of its pawns reaches the far row, or when the
///   opponent has no legal move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnRules;

impl PawnRules {
    /// Create the rules engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for PawnRules {
    fn legal_moves(&self, state: &BoardState, piece: &Piece) -> PieceMoves {
        let mut moves = PieceMoves::new();
        let from = piece.cell();
        let config = state.config();
        let drow = piece.side.direction();

        let on_board = |cell: Option<Cell>| cell.filter(|&c| config.contains(c));

        if let Some(to) = on_board(from.offset(0, drow)) {
            if state.is_empty(to) {
                moves.push(Move::new(from, to));
            }
        }

        // Right diagonal, then left.
        for dcol in [1, -1] {
            if let Some(to) = on_board(from.offset(dcol, drow)) {
                if state.occupant(to) == Some(piece.side.opponent()) {
                    moves.push(Move::new(from, to));
                }
            }
        }

        moves
    }

    fn apply(&self, state: &BoardState, mv: &Move) -> Result<BoardState> {
        let mut next = state.clone();
        next.move_piece(mv)?;
        Ok(next)
    }

    fn has_won(&self, state: &BoardState, side: Side) -> bool {
        let target = side.target_row(state.rows());
        state.pieces_of(side).any(|p| p.row == target)
            || !self.has_legal_move(state, side.opponent())
    }
}
