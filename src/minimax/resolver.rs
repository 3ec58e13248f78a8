//! Maps a chosen successor position back to the caller's move list.

use crate::core::{BoardState, CanonicalKey, Move};
use crate::error::{Error, Result};
use crate::rules::RulesEngine;

/// Finds which of the caller's moves produces a given position.
pub struct MoveResolver<'a, E: RulesEngine> {
    rules: &'a E,
}

impl<'a, E: RulesEngine> MoveResolver<'a, E> {
    /// Create a resolver.
    pub fn new(rules: &'a E) -> Self {
        Self { rules }
    }

    /// Index of the first move in `legal_moves` that turns `board` into the
    /// position with key `target`.
    ///
    /// Each candidate is applied to a private copy; `board` is untouched.
    /// A move list that disagrees with the rules engine's own generation is
    /// reported, never papered over.
    pub fn resolve(
        &self,
        board: &BoardState,
        target: &CanonicalKey,
        legal_moves: &[Move],
    ) -> Result<usize> {
        for (index, mv) in legal_moves.iter().enumerate() {
            let next = self.rules.apply(board, mv)?;
            if next.key() == target {
                return Ok(index);
            }
        }

        Err(Error::UnresolvedMove {
            key: target.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, Cell, Side};
    use crate::rules::PawnRules;

    #[test]
    fn test_resolve_finds_index() {
        let board = BoardState::initial(BoardConfig::default()).unwrap();
        let moves = PawnRules.generate_moves(&board, Side::A);
        let target = PawnRules.apply(&board, &moves[2]).unwrap();

        let index = MoveResolver::new(&PawnRules)
            .resolve(&board, target.key(), &moves)
            .unwrap();

        assert_eq!(index, 2);
    }

    #[test]
    fn test_resolve_with_reordered_list() {
        let board = BoardState::initial(BoardConfig::default()).unwrap();
        let mut moves = PawnRules.generate_moves(&board, Side::B);
        let target = PawnRules.apply(&board, &moves[0]).unwrap();
        moves.reverse();

        let index = MoveResolver::new(&PawnRules)
            .resolve(&board, target.key(), &moves)
            .unwrap();

        assert_eq!(index, moves.len() - 1);
    }

    #[test]
    fn test_resolve_no_match() {
        let board = BoardState::initial(BoardConfig::default()).unwrap();
        let moves = PawnRules.generate_moves(&board, Side::A);
        let unreachable = BoardState::initial(BoardConfig::new(4, 4).unwrap()).unwrap();

        let result = MoveResolver::new(&PawnRules).resolve(&board, unreachable.key(), &moves);

        assert!(matches!(result, Err(Error::UnresolvedMove { .. })));
    }

    #[test]
    fn test_resolve_bad_move_list() {
        let board = BoardState::initial(BoardConfig::default()).unwrap();
        let bogus = [Move::new(Cell::new(1, 1), Cell::new(1, 2))];

        let result = MoveResolver::new(&PawnRules).resolve(&board, board.key(), &bogus);

        assert_eq!(result, Err(Error::EmptySource { cell: Cell::new(1, 1) }));
    }
}
