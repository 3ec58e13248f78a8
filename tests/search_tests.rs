//! Minimax search integration tests.

use rust_pawns::core::{BoardConfig, BoardState, Cell, Piece, Side};
use rust_pawns::error::Error;
use rust_pawns::minimax::{
    minimax_traverse, AlphaBetaSearch, GraphBuilder, MinimaxSearch, Outcome, SearchConfig,
};
use rust_pawns::rules::{PawnRules, RulesEngine};

const WIN: i32 = 1000;

fn board(rows: u8, cols: u8, pieces: &[(u8, u8, Side)]) -> BoardState {
    BoardState::new(
        BoardConfig::new(rows, cols).unwrap(),
        pieces.iter().map(|&(c, r, s)| Piece::new(c, r, s)),
    )
    .unwrap()
}

// =============================================================================
// Graph Construction
// =============================================================================

#[test]
fn test_transpositions_share_a_node() {
    let initial = BoardState::initial(BoardConfig::default()).unwrap();
    let graph = GraphBuilder::new(&PawnRules, Side::A, 2).build(&initial).unwrap();
    let stats = graph.stats();

    // a0 b* a3 and a3 b* a0 reach the same position at depth 3.
    assert!(stats.transpositions > 0);
    assert!(stats.merged_count > 0);

    let mut keys: Vec<_> = graph.iter().map(|(_, node)| node.state.key().clone()).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total, "every position appears once");
}

#[test]
fn test_merged_nodes_are_not_expanded() {
    let initial = BoardState::initial(BoardConfig::default()).unwrap();
    let horizon = 4;
    let graph = GraphBuilder::new(&PawnRules, Side::A, horizon).build(&initial).unwrap();

    for (id, node) in graph.iter() {
        let inner = u32::from(node.depth) <= horizon;
        if inner && node.outcome == Outcome::Undecided && !node.expanded {
            assert!(graph.in_degree(id) > 1, "{id} skipped without being merged");
        }
    }
}

#[test]
fn test_terminal_nodes_have_no_successors() {
    let initial = BoardState::initial(BoardConfig::new(4, 3).unwrap()).unwrap();
    let graph = GraphBuilder::new(&PawnRules, Side::B, 6).build(&initial).unwrap();

    assert!(graph.stats().terminal_count > 0);
    for (id, node) in graph.iter() {
        if node.outcome.is_terminal() {
            assert_eq!(graph.out_degree(id), 0);
        }
    }
}

#[test]
fn test_edges_match_successor_lists() {
    let initial = BoardState::initial(BoardConfig::default()).unwrap();
    let graph = GraphBuilder::new(&PawnRules, Side::A, 4).build(&initial).unwrap();

    let total: usize = graph.iter().map(|(id, _)| graph.out_degree(id)).sum();
    assert_eq!(total, graph.edge_count());
}

// =============================================================================
// Decisions
// =============================================================================

#[test]
fn test_decision_is_one_move_from_the_root() {
    let initial = BoardState::initial(BoardConfig::default()).unwrap();
    let mut search = MinimaxSearch::pawns(SearchConfig::default()).unwrap();

    let decision = search.decide(&initial, Side::A).unwrap();
    let successors: Vec<_> = PawnRules
        .generate_moves(&initial, Side::A)
        .iter()
        .map(|mv| PawnRules.apply(&initial, mv).unwrap())
        .collect();

    assert!(successors.contains(&decision.state));
}

#[test]
fn test_side_b_takes_immediate_win() {
    let state = board(4, 3, &[(1, 1, Side::B), (0, 0, Side::A), (2, 2, Side::A)]);
    let mut search = MinimaxSearch::pawns(SearchConfig::default()).unwrap();

    let decision = search.decide(&state, Side::B).unwrap();

    assert_eq!(decision.value, WIN);
    assert!(PawnRules.has_won(&decision.state, Side::B));
}

#[test]
fn test_opponent_reaching_goal_with_last_pawn_is_a_loss() {
    // Only the capture wins. Any other move lets B step onto row 0 with its
    // last pawn, which also leaves B without moves.
    let state = board(4, 4, &[(0, 0, Side::A), (2, 0, Side::A), (3, 1, Side::B)]);
    let mut search = MinimaxSearch::pawns(SearchConfig::default()).unwrap();

    let decision = search.decide(&state, Side::A).unwrap();

    assert_eq!(decision.value, WIN);
    assert_eq!(decision.state.occupant(Cell::new(3, 1)), Some(Side::A));
    assert_eq!(decision.state.count(Side::B), 0);
}

#[test]
fn test_hopeless_position_still_moves() {
    // A's only pawn can step forward; B reaches row 0 on its next move no
    // matter what.
    let state = board(4, 4, &[(3, 0, Side::A), (0, 1, Side::B)]);
    let mut search = MinimaxSearch::pawns(SearchConfig::default()).unwrap();

    let decision = search.decide(&state, Side::A).unwrap();

    assert_eq!(decision.value, -WIN);
    assert_eq!(decision.state.occupant(Cell::new(3, 1)), Some(Side::A));
}

#[test]
fn test_finished_game_has_no_candidates() {
    let state = board(4, 4, &[(1, 1, Side::A), (1, 2, Side::B)]);
    let mut search = MinimaxSearch::pawns(SearchConfig::default()).unwrap();

    assert_eq!(search.decide(&state, Side::A), Err(Error::NoCandidateMoves));
}

#[test]
fn test_odd_horizon_rejected() {
    let result = MinimaxSearch::pawns(SearchConfig::default().with_horizon(5));
    assert!(matches!(result, Err(Error::OddHorizon { horizon: 5 })));
}

#[test]
fn test_decisions_are_deterministic() {
    let initial = BoardState::initial(BoardConfig::new(5, 4).unwrap()).unwrap();
    let mut first = MinimaxSearch::pawns(SearchConfig::default()).unwrap();
    let mut second = MinimaxSearch::pawns(SearchConfig::default()).unwrap();

    assert_eq!(
        first.decide(&initial, Side::A).unwrap(),
        second.decide(&initial, Side::A).unwrap()
    );
}

// =============================================================================
// Pruning
// =============================================================================

#[test]
fn test_alpha_beta_matches_plain_minimax() {
    let positions = [
        (BoardState::initial(BoardConfig::default()).unwrap(), Side::A),
        (BoardState::initial(BoardConfig::new(4, 3).unwrap()).unwrap(), Side::B),
        (board(5, 4, &[(0, 1, Side::A), (2, 2, Side::A), (1, 3, Side::B), (3, 4, Side::B)]), Side::B),
    ];

    for (state, side) in positions {
        let graph = GraphBuilder::new(&PawnRules, side, 6).build(&state).unwrap();

        let pruned = AlphaBetaSearch::new(&graph, WIN).traverse().unwrap();
        let plain = minimax_traverse(&graph, WIN).unwrap();

        assert_eq!(pruned, plain);
    }
}

#[test]
fn test_pruning_skips_nodes() {
    let initial = BoardState::initial(BoardConfig::default()).unwrap();
    let mut search = MinimaxSearch::pawns(SearchConfig::default()).unwrap();
    search.decide(&initial, Side::A).unwrap();

    let stats = search.stats();
    assert!(stats.cutoffs > 0);
    assert!(stats.evaluation_ratio() > 0.0);
}
