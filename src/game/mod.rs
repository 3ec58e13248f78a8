//! Playing full games.
//!
//! `Match` alternates turns between two `MoveSelector`s from the standard
//! starting position and records every move. There is no I/O: rendering and
//! human input belong to whatever drives the match.

mod driver;

pub use driver::{Match, MatchConfig, MatchRecord};
