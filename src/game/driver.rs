//! Headless match driver.
//!
//! Alternates turns between two selectors until one side wins. Side A moves
//! first. A side wins the moment its move puts a pawn on the far row or
//! leaves the opponent without a legal move.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::agents::MoveSelector;
use crate::core::{BoardConfig, BoardState, MoveRecord, Side};
use crate::error::{Error, Result};
use crate::rules::{PawnRules, RulesEngine};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board dimensions for the whole match.
    pub board: BoardConfig,

    /// Maximum plies before the match is abandoned without a winner.
    /// Every move advances or removes a pawn, so real games end far sooner.
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            max_plies: 1000,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set board dimensions.
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set maximum plies.
    pub fn with_max_plies(mut self, max: u32) -> Self {
        self.max_plies = max;
        self
    }
}

/// What happened in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The winning side, or `None` if `max_plies` ran out.
    pub winner: Option<Side>,

    /// Every move played, in order.
    pub moves: Vec<MoveRecord>,

    /// Final position.
    pub final_state: BoardState,
}

impl MatchRecord {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Runs matches under one rule set.
#[derive(Clone, Debug, Default)]
pub struct Match<E: RulesEngine = PawnRules> {
    rules: E,
    config: MatchConfig,
}

impl Match<PawnRules> {
    /// Match with the pawn race rules.
    pub fn pawns(config: MatchConfig) -> Result<Self> {
        Self::new(PawnRules, config)
    }
}

impl<E: RulesEngine> Match<E> {
    /// Create a match runner. Fails on an invalid board size.
    pub fn new(rules: E, config: MatchConfig) -> Result<Self> {
        config.board.validate()?;
        Ok(Self { rules, config })
    }

    /// The match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play from the standard initial position, side A first.
    pub fn play(
        &self,
        side_a: &mut dyn MoveSelector,
        side_b: &mut dyn MoveSelector,
    ) -> Result<MatchRecord> {
        let start = BoardState::initial(self.config.board)?;
        self.play_from(start, Side::A, side_a, side_b)
    }

    /// Play from an arbitrary position with `first` to move.
    #[instrument(skip_all, fields(a = side_a.name(), b = side_b.name(), first = %first))]
    pub fn play_from(
        &self,
        start: BoardState,
        first: Side,
        side_a: &mut dyn MoveSelector,
        side_b: &mut dyn MoveSelector,
    ) -> Result<MatchRecord> {
        let mut state = start;
        let mut moves = Vec::new();
        let mut side = first;

        for ply in 0..self.config.max_plies {
            let legal = self.rules.generate_moves(&state, side);
            if legal.is_empty() {
                return Err(Error::NoLegalMoves { side });
            }

            let selector: &mut dyn MoveSelector = match side {
                Side::A => &mut *side_a,
                Side::B => &mut *side_b,
            };
            let index = selector.choose(&state, side, &legal)?;
            let mv = *legal.get(index).ok_or(Error::InvalidMoveIndex {
                index,
                len: legal.len(),
            })?;

            state = self.rules.apply(&state, &mv)?;
            moves.push(MoveRecord::new(side, mv, ply));
            trace!(ply, side = %side, mv = %mv, "move played");

            if self.rules.has_won(&state, side) {
                debug!(winner = %side, plies = moves.len(), "match finished");
                return Ok(MatchRecord {
                    winner: Some(side),
                    moves,
                    final_state: state,
                });
            }

            side = side.opponent();
        }

        debug!(plies = moves.len(), "match abandoned at ply limit");
        Ok(MatchRecord {
            winner: None,
            moves,
            final_state: state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomSelector;
    use crate::core::{Move, Piece};

    /// Always answers with the same index.
    struct Fixed(usize);

    impl MoveSelector for Fixed {
        fn choose(&mut self, _: &BoardState, _: Side, _: &[Move]) -> Result<usize> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.max_plies, 1000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::new()
            .with_board(BoardConfig::new(5, 3).unwrap())
            .with_max_plies(10);

        assert_eq!(config.board.rows, 5);
        assert_eq!(config.max_plies, 10);
    }

    #[test]
    fn test_random_match_finishes() {
        let game = Match::pawns(MatchConfig::default()).unwrap();
        let record = game
            .play(&mut RandomSelector::new(1), &mut RandomSelector::new(2))
            .unwrap();

        let winner = record.winner.unwrap();
        assert!(PawnRules.has_won(&record.final_state, winner));
        assert_eq!(record.moves.last().unwrap().side, winner);
        assert_eq!(record.moves[0].side, Side::A);
    }

    #[test]
    fn test_moves_alternate() {
        let game = Match::pawns(MatchConfig::default()).unwrap();
        let record = game
            .play(&mut RandomSelector::new(5), &mut RandomSelector::new(6))
            .unwrap();

        for (i, pair) in record.moves.windows(2).enumerate() {
            assert_ne!(pair[0].side, pair[1].side);
            assert_eq!(pair[0].ply as usize, i);
        }
    }

    #[test]
    fn test_ply_limit() {
        let game = Match::pawns(MatchConfig::default().with_max_plies(2)).unwrap();
        let record = game.play(&mut Fixed(0), &mut Fixed(0)).unwrap();

        assert_eq!(record.winner, None);
        assert_eq!(record.plies(), 2);
    }

    #[test]
    fn test_invalid_index() {
        let game = Match::pawns(MatchConfig::default()).unwrap();
        let result = game.play(&mut Fixed(99), &mut Fixed(0));

        assert_eq!(result.unwrap_err(), Error::InvalidMoveIndex { index: 99, len: 4 });
    }

    #[test]
    fn test_no_legal_moves_at_start() {
        let config = BoardConfig::default();
        let start = BoardState::new(
            config,
            [Piece::new(1, 1, Side::A), Piece::new(1, 2, Side::B), Piece::new(3, 3, Side::B)],
        )
        .unwrap();

        let game = Match::pawns(MatchConfig::default()).unwrap();
        let result = game.play_from(start, Side::A, &mut Fixed(0), &mut Fixed(0));

        assert_eq!(result.unwrap_err(), Error::NoLegalMoves { side: Side::A });
    }

    #[test]
    fn test_record_serialization() {
        let game = Match::pawns(MatchConfig::default()).unwrap();
        let record = game
            .play(&mut RandomSelector::new(8), &mut RandomSelector::new(9))
            .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MatchRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
