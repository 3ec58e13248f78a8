//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies expanded after the searching side's first move (default: 6).
    /// Must be even so the searching side makes the last move in the graph.
    /// 8 plays noticeably better on a 4x4 board but is much slower.
    pub horizon: u32,

    /// Magnitude of a decided outcome (default: 1000).
    /// Must dominate every other score, including the 0 given to undecided
    /// positions.
    pub win_score: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            win_score: 1000,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom horizon.
    pub fn with_horizon(mut self, horizon: u32) -> Self {
        self.horizon = horizon;
        self
    }

    /// Create a new config with custom win score.
    pub fn with_win_score(mut self, score: i32) -> Self {
        self.win_score = score;
        self
    }

    /// Check the horizon parity and the win score sign.
    pub fn validate(&self) -> Result<()> {
        if self.horizon % 2 != 0 {
            return Err(Error::OddHorizon {
                horizon: self.horizon,
            });
        }
        if self.win_score <= 0 {
            return Err(Error::InvalidWinScore {
                score: self.win_score,
            });
        }
        Ok(())
    }
}
