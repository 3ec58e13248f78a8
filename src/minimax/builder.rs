//! Bounded-horizon game graph construction.
//!
//! The graph covers the root, one ply of the searching side's moves, then
//! `horizon` further plies alternating opponent and searching side. Each ply
//! expands only the current frontier (see [`GraphNode::is_frontier`]), so a
//! position reached along two paths is merged into one node and not expanded
//! again. Lines through merged nodes end early; they score as undecided.
//!
//! [`GraphNode::is_frontier`]: super::node::GraphNode::is_frontier

use tracing::debug;

use crate::core::{BoardState, Side};
use crate::error::Result;
use crate::rules::RulesEngine;

use super::graph::GameGraph;
use super::node::{NodeId, Outcome};

/// Expands a [`GameGraph`] for one searching side.
pub struct GraphBuilder<'a, E: RulesEngine> {
    /// The game rules.
    rules: &'a E,

    /// Side the outcomes are scored for.
    side: Side,

    /// Plies after the first.
    horizon: u32,
}

impl<'a, E: RulesEngine> GraphBuilder<'a, E> {
    /// Create a builder. The horizon parity is checked by `SearchConfig`.
    pub fn new(rules: &'a E, side: Side, horizon: u32) -> Self {
        Self {
            rules,
            side,
            horizon,
        }
    }

    /// Classify a position reached by a move of `mover`, relative to the
    /// searching side.
    ///
    /// The mover's win takes precedence: a side that reaches its target row
    /// with its last mobile pawn also leaves itself without moves, which
    /// would otherwise read as a stalemate win for the other side.
    pub fn classify(&self, state: &BoardState, mover: Side) -> Outcome {
        let winner = if self.rules.has_won(state, mover) {
            Some(mover)
        } else if self.rules.has_won(state, mover.opponent()) {
            Some(mover.opponent())
        } else {
            None
        };

        match winner {
            Some(side) if side == self.side => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Undecided,
        }
    }

    /// Side to move at expansion ply `ply` (0-based, after the first ply).
    #[must_use]
    pub fn mover_at(&self, ply: u32) -> Side {
        if ply % 2 == 0 {
            self.side.opponent()
        } else {
            self.side
        }
    }

    /// Build the graph from `root`.
    pub fn build(&self, root: &BoardState) -> Result<GameGraph> {
        let mut graph = GameGraph::new(root.clone());
        let root_id = graph.root();
        self.expand(&mut graph, root_id, self.side)?;

        for ply in 0..self.horizon {
            let mover = self.mover_at(ply);
            let frontier = graph.frontier();

            for &node in &frontier {
                self.expand(&mut graph, node, mover)?;
            }

            debug!(
                ply = ply + 2,
                mover = %mover,
                frontier = frontier.len(),
                nodes = graph.len(),
                edges = graph.edge_count(),
                "expanded ply"
            );

            if frontier.is_empty() {
                break;
            }
        }

        Ok(graph)
    }

    /// Generate every move for `mover` at `node` and link the results.
    fn expand(&self, graph: &mut GameGraph, node: NodeId, mover: Side) -> Result<()> {
        let parent = graph.get(node);
        let depth = parent.depth + 1;

        let children = self
            .rules
            .generate_moves(&parent.state, mover)
            .iter()
            .map(|mv| self.rules.apply(&parent.state, mv))
            .collect::<Result<Vec<_>>>()?;

        for child in children {
            let outcome = self.classify(&child, mover);
            let id = graph.insert(child, outcome, depth).id();
            graph.add_edge(node, id);
        }

        graph.mark_expanded(node);
        Ok(())
    }
}
