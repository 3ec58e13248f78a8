//! Side identification.
//!
//! ## Side
//!
//! The two players of the pawn race. `Side::A` starts on row 0 and advances
//! toward increasing rows; `Side::B` starts on the last row and advances
//! toward row 0. Each side wins by reaching the other side's home row.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves first, advances toward increasing rows. Symbol `w`.
    A,
    /// Advances toward decreasing rows. Symbol `b`.
    B,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Row step taken by a forward move: +1 for A, -1 for B.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i16 {
        match self {
            Side::A => 1,
            Side::B => -1,
        }
    }

    /// Row this side must reach to win on a board with `rows` rows.
    #[inline]
    #[must_use]
    pub const fn target_row(self, rows: u8) -> u8 {
        match self {
            Side::A => rows - 1,
            Side::B => 0,
        }
    }

    /// Row this side starts on.
    #[inline]
    #[must_use]
    pub const fn home_row(self, rows: u8) -> u8 {
        self.opponent().target_row(rows)
    }

    /// Single-character symbol used in canonical keys and board rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::A => 'w',
            Side::B => 'b',
        }
    }

    /// Parse a canonical-key symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Side::A),
            'b' => Some(Side::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}
