//! Arena-based game graph with transposition merging.
//!
//! Nodes live in a flat `Vec<GraphNode>` referenced by `NodeId`. A side map
//! from canonical key to `NodeId` guarantees one node per position: a second
//! path to a known position adds an edge to the existing node instead of a
//! copy.

use rustc_hash::FxHashMap;

use crate::core::{BoardState, CanonicalKey};

use super::node::{GraphNode, NodeId, Outcome};

/// Result of inserting a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insert {
    /// A new node was allocated.
    New(NodeId),
    /// The position was already in the graph.
    Merged(NodeId),
}

impl Insert {
    /// The node ID either way.
    #[must_use]
    pub fn id(self) -> NodeId {
        match self {
            Insert::New(id) | Insert::Merged(id) => id,
        }
    }
}

/// Directed graph of positions reachable from a root.
///
/// Built fresh for every decision and dropped afterwards.
#[derive(Clone, Debug)]
pub struct GameGraph {
    /// All nodes in the graph.
    nodes: Vec<GraphNode>,

    /// Canonical key to node handle.
    index: FxHashMap<CanonicalKey, NodeId>,

    /// The root node ID (always 0).
    root: NodeId,

    /// Total number of edges.
    edge_count: usize,

    /// Insertions that hit an existing node.
    transpositions: usize,
}

impl GameGraph {
    /// Create a graph holding only the root position, marked undecided.
    pub fn new(root: BoardState) -> Self {
        let mut graph = Self {
            nodes: Vec::with_capacity(1024),
            index: FxHashMap::default(),
            root: NodeId::new(0),
            edge_count: 0,
            transpositions: 0,
        };
        graph.alloc(GraphNode::new(root, Outcome::Undecided, 0));
        graph
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut GraphNode {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, node: GraphNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.index.insert(node.state.key().clone(), id);
        self.nodes.push(node);
        id
    }

    /// Look up a position by canonical key.
    #[must_use]
    pub fn find(&self, key: &CanonicalKey) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Insert a position, reusing the existing node if its key is known.
    ///
    /// A merged node keeps its original outcome and depth.
    pub fn insert(&mut self, state: BoardState, outcome: Outcome, depth: u16) -> Insert {
        if let Some(id) = self.find(state.key()) {
            self.transpositions += 1;
            return Insert::Merged(id);
        }
        Insert::New(self.alloc(GraphNode::new(state, outcome, depth)))
    }

    /// Add a directed edge.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.get_mut(from).successors.push(to);
        self.get_mut(to).in_degree += 1;
        self.edge_count += 1;
    }

    /// Record that moves were generated from a node.
    pub fn mark_expanded(&mut self, id: NodeId) {
        self.get_mut(id).expanded = true;
    }

    /// Outgoing edges of a node, in move generation order.
    #[must_use]
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).successors
    }

    /// Number of edges into a node.
    #[must_use]
    pub fn in_degree(&self, id: NodeId) -> u32 {
        self.get(id).in_degree
    }

    /// Number of edges out of a node.
    #[must_use]
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.get(id).out_degree()
    }

    /// Nodes eligible for the next expansion ply, in allocation order.
    #[must_use]
    pub fn frontier(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.is_frontier())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is allocated on creation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the graph.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.edge_count,
            terminal_count: self.nodes.iter().filter(|n| n.outcome.is_terminal()).count(),
            merged_count: self.nodes.iter().filter(|n| n.in_degree > 1).count(),
            transpositions: self.transpositions,
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
        }
    }
}

/// Statistics about a game graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Total number of edges.
    pub edge_count: usize,

    /// Nodes where either side has already won.
    pub terminal_count: usize,

    /// Nodes with two or more parents.
    pub merged_count: usize,

    /// Insertions that were redirected to an existing node.
    pub transpositions: usize,

    /// Deepest ply at which a new node was allocated.
    pub max_depth: u16,
}
