//! Minimax with alpha-beta pruning over a built game graph.
//!
//! `max_value` runs at nodes where the searching side moves, `min_value` where
//! the opponent moves. Both read the graph only; the graph is a DAG (every
//! move removes a piece or advances one) so plain recursion terminates.
//!
//! Leaf rules shared by the pruned and unpruned evaluators:
//!
//! - a decided node scores its outcome, whatever successors it has;
//! - a node that was never expanded (horizon cut or merged transposition)
//!   scores 0;
//! - an expanded node with no successors scores the worst value for the side
//!   to move there: `NEG_INF` at max nodes, `POS_INF` at min nodes.

use tracing::trace;

use crate::error::{Error, Result};

use super::graph::GameGraph;
use super::node::NodeId;

/// Negative infinity. No outcome score reaches it.
pub const NEG_INF: i32 = i32::MIN;

/// Positive infinity. No outcome score reaches it.
pub const POS_INF: i32 = i32::MAX;

/// Best first move found by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Direct successor of the root.
    pub node: NodeId,

    /// Guaranteed value of that move for the searching side.
    pub value: i32,
}

/// Alpha-beta evaluator bound to one graph.
pub struct AlphaBetaSearch<'g> {
    graph: &'g GameGraph,

    win_score: i32,

    /// Nodes entered by `max_value`/`min_value`.
    visited: u32,

    /// Successor loops abandoned on a bound.
    cutoffs: u32,
}

impl<'g> AlphaBetaSearch<'g> {
    /// Create an evaluator.
    pub fn new(graph: &'g GameGraph, win_score: i32) -> Self {
        Self {
            graph,
            win_score,
            visited: 0,
            cutoffs: 0,
        }
    }

    /// Nodes evaluated so far.
    #[must_use]
    pub fn visited(&self) -> u32 {
        self.visited
    }

    /// Cutoffs taken so far.
    #[must_use]
    pub fn cutoffs(&self) -> u32 {
        self.cutoffs
    }

    /// Value of a node where the searching side is to move.
    pub fn max_value(&mut self, node: NodeId, mut alpha: i32, beta: i32) -> i32 {
        self.visited += 1;
        if let Some(value) = leaf_value(self.graph, node, self.win_score) {
            return value;
        }

        let mut best = NEG_INF;
        for &child in self.graph.successors(node) {
            best = best.max(self.min_value(child, alpha, beta));
            if best >= beta {
                self.cutoffs += 1;
                return best;
            }
            if best > alpha {
                alpha = best;
            }
        }
        best
    }

    /// Value of a node where the opponent is to move.
    pub fn min_value(&mut self, node: NodeId, alpha: i32, mut beta: i32) -> i32 {
        self.visited += 1;
        if let Some(value) = leaf_value(self.graph, node, self.win_score) {
            return value;
        }

        let mut best = POS_INF;
        for &child in self.graph.successors(node) {
            best = best.min(self.max_value(child, alpha, beta));
            if best <= alpha {
                self.cutoffs += 1;
                return best;
            }
            if best < beta {
                beta = best;
            }
        }
        best
    }

    /// Pick the root successor with the greatest value.
    ///
    /// Every candidate gets a fresh `(NEG_INF, POS_INF)` window, so candidates
    /// never prune each other. Ties keep the first candidate in move order.
    ///
    /// The root must have at least one successor; detecting finished games is
    /// the caller's job.
    pub fn traverse(&mut self) -> Result<SearchResult> {
        let root = self.graph.root();
        let mut best: Option<SearchResult> = None;

        for &candidate in self.graph.successors(root) {
            let value = self.min_value(candidate, NEG_INF, POS_INF);
            trace!(node = %candidate, value, "evaluated candidate");

            if best.map_or(true, |b| value > b.value) {
                best = Some(SearchResult {
                    node: candidate,
                    value,
                });
            }
        }

        best.ok_or(Error::NoCandidateMoves)
    }
}

/// Value of a node that needs no successor search, if any.
fn leaf_value(graph: &GameGraph, node: NodeId, win_score: i32) -> Option<i32> {
    let node = graph.get(node);
    if node.outcome.is_terminal() || !node.expanded {
        Some(node.outcome.score(win_score))
    } else {
        None
    }
}

/// Unpruned minimax value of `node`, with the same leaf rules as
/// [`AlphaBetaSearch`]. Visits every reachable node; meant for verification.
pub fn minimax(graph: &GameGraph, node: NodeId, maximizing: bool, win_score: i32) -> i32 {
    if let Some(value) = leaf_value(graph, node, win_score) {
        return value;
    }

    let values = graph
        .successors(node)
        .iter()
        .map(|&child| minimax(graph, child, !maximizing, win_score));

    if maximizing {
        values.max().unwrap_or(NEG_INF)
    } else {
        values.min().unwrap_or(POS_INF)
    }
}

/// Root decision by unpruned minimax, with the same tie-breaking as
/// [`AlphaBetaSearch::traverse`].
pub fn minimax_traverse(graph: &GameGraph, win_score: i32) -> Result<SearchResult> {
    let mut best: Option<SearchResult> = None;

    for &candidate in graph.successors(graph.root()) {
        let value = minimax(graph, candidate, false, win_score);
        if best.map_or(true, |b| value > b.value) {
            best = Some(SearchResult {
                node: candidate,
                value,
            });
        }
    }

    best.ok_or(Error::NoCandidateMoves)
}
