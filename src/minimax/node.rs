//! Game graph node structures.
//!
//! Uses arena-based allocation with index references (NodeId). Edges store
//! handles, never copies of a state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::BoardState;

/// Index into the GameGraph node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Game outcome at a node, from the searching side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The searching side has already won.
    Win,
    /// The opponent has already won.
    Loss,
    /// Nobody has won yet, or the horizon cut the line off.
    Undecided,
}

impl Outcome {
    /// Score of this outcome: `+win_score`, `-win_score` or 0.
    #[inline]
    #[must_use]
    pub fn score(self, win_score: i32) -> i32 {
        match self {
            Outcome::Win => win_score,
            Outcome::Loss => -win_score,
            Outcome::Undecided => 0,
        }
    }

    /// Decided outcomes end the line.
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// A position in the game graph.
#[derive(Clone, Debug)]
pub struct GraphNode {
    /// The position. Never mutated once stored.
    pub state: BoardState,

    /// Terminal classification relative to the searching side.
    pub outcome: Outcome,

    /// Ply at which the position was first reached (root = 0).
    pub depth: u16,

    /// Number of edges pointing at this node.
    pub in_degree: u32,

    /// Whether moves have been generated from this node.
    pub expanded: bool,

    /// Outgoing edges in move generation order.
    /// SmallVec optimizes for typical branching factor <= 8.
    pub successors: SmallVec<[NodeId; 8]>,
}

impl GraphNode {
    /// Create an unexpanded node.
    pub fn new(state: BoardState, outcome: Outcome, depth: u16) -> Self {
        Self {
            state,
            outcome,
            depth,
            in_degree: 0,
            expanded: false,
            successors: SmallVec::new(),
        }
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.successors.len()
    }

    /// Eligible for expansion: no successors, exactly one parent, undecided,
    /// and never expanded. Merged nodes (two or more parents) stay leaves.
    #[must_use]
    pub fn is_frontier(&self) -> bool {
        self.successors.is_empty()
            && self.in_degree == 1
            && self.outcome == Outcome::Undecided
            && !self.expanded
    }
}
