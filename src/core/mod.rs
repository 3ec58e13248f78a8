//! Core types: sides, cells, moves, board configuration, board state, RNG.

pub mod side;
pub mod moves;
pub mod config;
pub mod state;
pub mod rng;

pub use side::Side;
pub use moves::{Cell, Move, MoveRecord};
pub use config::BoardConfig;
pub use state::{BoardState, CanonicalKey, Piece};
pub use rng::GameRng;
