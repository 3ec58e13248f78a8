//! Rules engine for the pawn race.
//!
//! `RulesEngine` defines:
//! - Legal moves for each piece and side
//! - How moves produce new states
//! - Win conditions
//!
//! The search calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{PawnRules, PieceMoves, RulesEngine};
