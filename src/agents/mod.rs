//! Move selectors that drive a match.
//!
//! - `MinimaxSelector`: bounded-horizon minimax with alpha-beta pruning
//! - `RandomSelector`: uniform over the legal moves, seeded

pub mod selector;

pub use selector::{MinimaxSelector, MoveSelector, RandomSelector};
