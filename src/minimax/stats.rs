//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use super::graph::GraphStats;

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes in the built graph.
    pub nodes: usize,

    /// Edges in the built graph.
    pub edges: usize,

    /// Insertions merged into an existing node.
    pub transpositions: usize,

    /// Nodes where either side has already won.
    pub terminal_nodes: usize,

    /// Deepest ply reached by the graph.
    pub max_depth: u16,

    /// Nodes entered by the alpha-beta evaluators.
    pub nodes_evaluated: u32,

    /// Alpha or beta cutoffs taken.
    pub cutoffs: u32,

    /// Time spent building the graph (microseconds).
    pub build_us: u64,

    /// Time spent searching the graph (microseconds).
    pub search_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copy the shape of a built graph.
    pub fn record_graph(&mut self, graph: &GraphStats) {
        self.nodes = graph.node_count;
        self.edges = graph.edge_count;
        self.transpositions = graph.transpositions;
        self.terminal_nodes = graph.terminal_count;
        self.max_depth = graph.max_depth;
    }

    /// Average outgoing edges per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.edges as f64 / self.nodes as f64
        }
    }

    /// Share of graph nodes the pruned search actually entered.
    #[must_use]
    pub fn evaluation_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.nodes_evaluated as f64 / self.nodes as f64
        }
    }

    /// Total time for the decision (microseconds).
    #[must_use]
    pub fn total_us(&self) -> u64 {
        self.build_us + self.search_us
    }
}
