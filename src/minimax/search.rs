//! Decision facade: build the graph, search it, resolve the move.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{BoardState, Move, Side};
use crate::error::Result;
use crate::rules::{PawnRules, RulesEngine};

use super::alphabeta::AlphaBetaSearch;
use super::builder::GraphBuilder;
use super::config::SearchConfig;
use super::graph::GameGraph;
use super::resolver::MoveResolver;
use super::stats::SearchStats;

/// Outcome of one decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// The position after the chosen move.
    pub state: BoardState,

    /// Guaranteed value of the chosen move for the deciding side.
    pub value: i32,
}

/// Minimax search context.
///
/// Generic over the rules engine type. Owns the configuration and the
/// statistics of the last decision; every decision builds and drops its own
/// graph, and the deciding side is passed per call.
pub struct MinimaxSearch<E: RulesEngine = PawnRules> {
    /// The game rules engine.
    rules: E,

    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last decision.
    stats: SearchStats,
}

impl MinimaxSearch<PawnRules> {
    /// Search with the pawn race rules.
    pub fn pawns(config: SearchConfig) -> Result<Self> {
        Self::new(PawnRules, config)
    }
}

impl<E: RulesEngine> MinimaxSearch<E> {
    /// Create a search context. Fails on an invalid configuration.
    pub fn new(rules: E, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules,
            config,
            stats: SearchStats::default(),
        })
    }

    /// The rules engine.
    pub fn rules(&self) -> &E {
        &self.rules
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last decision.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Build the game graph `side` would search from `board`.
    pub fn build_graph(&self, board: &BoardState, side: Side) -> Result<GameGraph> {
        GraphBuilder::new(&self.rules, side, self.config.horizon).build(board)
    }

    /// Choose the best successor of `board` for `side`.
    ///
    /// `side` must have a legal move; a finished game yields
    /// `Error::NoCandidateMoves`.
    #[instrument(skip(self, board), fields(horizon = self.config.horizon))]
    pub fn decide(&mut self, board: &BoardState, side: Side) -> Result<Decision> {
        self.stats.reset();

        let start = Instant::now();
        let graph = self.build_graph(board, side)?;
        self.stats.build_us = start.elapsed().as_micros() as u64;
        self.stats.record_graph(&graph.stats());

        let start = Instant::now();
        let mut search = AlphaBetaSearch::new(&graph, self.config.win_score);
        let result = search.traverse()?;
        self.stats.search_us = start.elapsed().as_micros() as u64;
        self.stats.nodes_evaluated = search.visited();
        self.stats.cutoffs = search.cutoffs();

        debug!(
            value = result.value,
            nodes = self.stats.nodes,
            transpositions = self.stats.transpositions,
            branching = self.stats.branching_factor(),
            evaluated = self.stats.nodes_evaluated,
            cutoffs = self.stats.cutoffs,
            elapsed_us = self.stats.total_us(),
            "decision made"
        );

        Ok(Decision {
            state: graph.get(result.node).state.clone(),
            value: result.value,
        })
    }

    /// Index into `legal_moves` of the move `side` should play.
    ///
    /// `legal_moves` must agree with the rules engine's generation for
    /// `board` and `side` (any order); otherwise the chosen position may have
    /// no matching entry and `Error::UnresolvedMove` is returned.
    pub fn choose_move_index(
        &mut self,
        board: &BoardState,
        side: Side,
        legal_moves: &[Move],
    ) -> Result<usize> {
        let decision = self.decide(board, side)?;
        MoveResolver::new(&self.rules).resolve(board, decision.state.key(), legal_moves)
    }
}
