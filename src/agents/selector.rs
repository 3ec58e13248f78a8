//! Move selectors.
//!
//! A selector sees what a player at the table sees: the board, its side, and
//! the numbered list of legal moves. It answers with an index into that list.

use crate::core::{BoardState, GameRng, Move, Side};
use crate::error::{Error, Result};
use crate::minimax::{MinimaxSearch, SearchConfig, SearchStats};
use crate::rules::{PawnRules, RulesEngine};

// =============================================================================
// Selector Trait
// =============================================================================

/// Something that picks moves.
pub trait MoveSelector {
    /// Pick an index into `legal_moves`.
    ///
    /// `legal_moves` is never empty when called by the match driver.
    fn choose(&mut self, board: &BoardState, side: Side, legal_moves: &[Move]) -> Result<usize>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

// =============================================================================
// Minimax
// =============================================================================

/// Plays the move bounded-horizon minimax considers best.
pub struct MinimaxSelector<E: RulesEngine = PawnRules> {
    search: MinimaxSearch<E>,
}

impl MinimaxSelector<PawnRules> {
    /// Minimax selector with the pawn race rules.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self {
            search: MinimaxSearch::pawns(config)?,
        })
    }
}

impl<E: RulesEngine> MinimaxSelector<E> {
    /// Wrap an existing search context.
    pub fn with_search(search: MinimaxSearch<E>) -> Self {
        Self { search }
    }

    /// Statistics of the last decision.
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl<E: RulesEngine> MoveSelector for MinimaxSelector<E> {
    fn choose(&mut self, board: &BoardState, side: Side, legal_moves: &[Move]) -> Result<usize> {
        self.search.choose_move_index(board, side, legal_moves)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

// =============================================================================
// Random
// =============================================================================

/// Plays a uniformly random legal move. Deterministic per seed.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: GameRng,
}

impl RandomSelector {
    /// Create a random selector.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn choose(&mut self, _board: &BoardState, side: Side, legal_moves: &[Move]) -> Result<usize> {
        if legal_moves.is_empty() {
            return Err(Error::NoLegalMoves { side });
        }
        Ok(self.rng.gen_index(legal_moves.len()))
    }

    fn name(&self) -> &str {
        "random"
    }
}
