//! # rust-pawns
//!
//! A pawn race engine with a bounded-horizon minimax player.
//!
//! ## Rules
//!
//! Two sides start on opposite home rows of a rectangular board, one pawn per
//! column. Side A moves toward higher rows, side B toward lower rows. A pawn
//! steps straight forward onto an empty cell or captures diagonally forward.
//! A side wins by reaching the far row, or by leaving the opponent with no
//! legal move.
//!
//! ## Architecture
//!
//! - **Canonical Keys**: Positions are identified by a column-major string of
//!   cell symbols, independent of piece order. Equal keys mean equal positions.
//!
//! - **Transposition Graph**: The search graph merges positions reached by
//!   different move orders into one node, so it is a DAG rather than a tree.
//!
//! - **Fresh Graph per Decision**: Nothing is cached across moves. Each
//!   decision builds, searches, and drops its own graph.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, moves, board configuration and state, RNG
//! - `rules`: RulesEngine trait and the pawn race rules
//! - `minimax`: Graph construction, alpha-beta search, move resolution
//! - `agents`: Move selectors (minimax, random)
//! - `game`: Headless match driver
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod rules;
pub mod minimax;
pub mod agents;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Side, Cell, Move, MoveRecord,
    BoardConfig, BoardState, CanonicalKey, Piece,
    GameRng,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{RulesEngine, PawnRules};

pub use crate::minimax::{
    SearchConfig, MinimaxSearch, Decision,
    GameGraph, GraphBuilder, GraphNode, NodeId, Outcome,
    AlphaBetaSearch, MoveResolver,
    SearchStats, GraphStats,
};

pub use crate::agents::{MoveSelector, MinimaxSelector, RandomSelector};

pub use crate::game::{Match, MatchConfig, MatchRecord};
