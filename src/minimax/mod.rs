//! Bounded-horizon minimax with alpha-beta pruning.
//!
//! ## Overview
//!
//! A decision runs in three steps, each on a fresh graph:
//!
//! - **Build**: `GraphBuilder` expands the positions reachable from the
//!   current board to a fixed ply horizon. Positions reached by different
//!   move orders share one node (keyed by canonical key).
//! - **Search**: `AlphaBetaSearch` evaluates every first move with minimax
//!   and alpha-beta pruning. Only wins and losses score; everything else,
//!   including lines cut off by the horizon, scores 0.
//! - **Resolve**: `MoveResolver` maps the chosen position back to an index
//!   in the caller's legal move list.
//!
//! ## Usage
//!
//! ```rust
//! use rust_pawns::core::{BoardConfig, BoardState, Side};
//! use rust_pawns::minimax::{MinimaxSearch, SearchConfig};
//! use rust_pawns::rules::{PawnRules, RulesEngine};
//!
//! let board = BoardState::initial(BoardConfig::default()).unwrap();
//! let moves = PawnRules.generate_moves(&board, Side::A);
//!
//! let mut search = MinimaxSearch::pawns(SearchConfig::default().with_horizon(2)).unwrap();
//! let index = search.choose_move_index(&board, Side::A, &moves).unwrap();
//! assert!(index < moves.len());
//! ```

pub mod alphabeta;
pub mod builder;
pub mod config;
pub mod graph;
pub mod node;
pub mod resolver;
pub mod search;
pub mod stats;

// Re-export main types
pub use alphabeta::{minimax, minimax_traverse, AlphaBetaSearch, SearchResult, NEG_INF, POS_INF};
pub use builder::GraphBuilder;
pub use config::SearchConfig;
pub use graph::{GameGraph, GraphStats, Insert};
pub use node::{GraphNode, NodeId, Outcome};
pub use resolver::MoveResolver;
pub use search::{Decision, MinimaxSearch};
pub use stats::SearchStats;
