//! Integration tests for mancala-rust
//!
//! These exercise the public call surface the way a turn driver would:
//! apply moves, check for the end of the game, finalize, and ask the
//! search for moves.

use mancala_rust::board::{BoardState, Player};
use mancala_rust::constants::STANDARD_TOTAL;
use mancala_rust::moves::{MoveError, apply_move, play_move};
use mancala_rust::outcome::{Outcome, evaluate, finalize, is_terminal};
use mancala_rust::search::{Searcher, choose_move};

// =============================================================================
// Helper functions
// =============================================================================

/// Apply a sequence of `(player_id, pit)` moves from the start position.
fn setup_position(moves: &[(u8, usize)]) -> BoardState {
    moves.iter().fold(BoardState::new(), |board, &(player, pit)| {
        apply_move(&board, player, pit)
            .unwrap_or_else(|e| panic!("Illegal move {player}:{pit} in setup: {e}"))
            .board
    })
}

/// Play random legal moves until the game ends, checking conservation after
/// every move. Returns the board at the end (before finalizing).
fn random_game(seed: u64) -> BoardState {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = BoardState::new();
    let mut player = Player::One;

    while !is_terminal(&board) {
        let legal: Vec<usize> = board.legal_pits(player).collect();
        let pit = legal[rng.usize(..legal.len())];
        let another_turn = play_move(&mut board, player, pit).unwrap();
        assert_eq!(
            board.total_beads(),
            STANDARD_TOTAL,
            "Beads not conserved after {player} played pit {pit}:\n{board}"
        );
        if !another_turn {
            player = player.opponent();
        }
    }
    board
}

// =============================================================================
// Sowing, bonus turns, and captures
// =============================================================================

#[test]
fn test_sowing_placement() {
    let board = setup_position(&[(1, 0)]);
    assert_eq!(board.rows()[0], [0, 5, 5, 5, 5, 4, 0]);
    assert_eq!(board.rows()[1], [4, 4, 4, 4, 4, 4, 0]);
}

#[test]
fn test_bonus_turn_from_pit_two() {
    let result = apply_move(&BoardState::new(), 1, 2).unwrap();
    assert!(result.another_turn, "Last bead should land in the store");
    assert_eq!(result.board.rows()[0], [4, 4, 0, 5, 5, 5, 1]);
}

#[test]
fn test_capture_sequence() {
    let board = setup_position(&[(1, 5), (2, 0), (1, 1)]);
    assert_eq!(board.store_count(Player::One), 2);
    assert_eq!(board.pit_count(Player::One, 5), 0, "Capturing pit is emptied");
    assert_eq!(board.total_beads(), STANDARD_TOTAL);
}

#[test]
fn test_invalid_move_reasons() {
    let board = setup_position(&[(1, 0)]);
    assert_eq!(apply_move(&board, 0, 1), Err(MoveError::InvalidPlayer(0)));
    assert_eq!(apply_move(&board, 1, 6), Err(MoveError::InvalidPitIndex(6)));
    assert_eq!(apply_move(&board, 1, 0), Err(MoveError::EmptyPit(0)));
}

// =============================================================================
// Termination and scoring
// =============================================================================

#[test]
fn test_game_over() {
    let mut board = BoardState::from_rows([[0, 0, 0, 0, 0, 0, 25], [0, 0, 0, 0, 0, 0, 23]]);
    assert!(is_terminal(&board));
    assert_eq!(evaluate(&board), Outcome::Winner(Player::One));

    let score = finalize(&mut board);
    assert_eq!(score.p1_score, 25);
    assert_eq!(score.p2_score, 23);
    assert_eq!(score.winner, Some(Player::One));
    assert_eq!(board.pits(Player::One), &[0; 6]);
    assert_eq!(board.pits(Player::Two), &[0; 6]);
}

#[test]
fn test_idempotent_sweep() {
    let mut once = BoardState::from_rows([[2, 0, 1, 0, 5, 0, 9], [0; 7]]);
    once.sweep_into_store(Player::One);
    let mut twice = once;
    twice.sweep_into_store(Player::One);
    assert_eq!(once.store_count(Player::One), 17);
    assert_eq!(twice.store_count(Player::One), once.store_count(Player::One));
}

#[test]
fn test_conservation_over_random_games() {
    for seed in 0..50 {
        let mut board = random_game(seed);
        let score = finalize(&mut board);
        assert_eq!(
            score.p1_score + score.p2_score,
            STANDARD_TOTAL,
            "Seed {seed}: scores should add up to all beads"
        );
        assert_eq!(board.total_in_pits(Player::One), 0);
        assert_eq!(board.total_in_pits(Player::Two), 0);
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_picks_legal_moves_through_a_game() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut board = BoardState::new();
    let mut player = Player::One;

    while !is_terminal(&board) {
        let pit = if player == Player::One {
            choose_move(&board, player, 4).expect("non-terminal position has a move")
        } else {
            let legal: Vec<usize> = board.legal_pits(player).collect();
            legal[rng.usize(..legal.len())]
        };
        assert!(
            board.pit_count(player, pit) > 0,
            "Search chose empty pit {pit} for {player}:\n{board}"
        );
        if !play_move(&mut board, player, pit).unwrap() {
            player = player.opponent();
        }
    }
}

#[test]
fn test_alpha_beta_matches_full_minimax() {
    let positions = [
        (setup_position(&[]), Player::One),
        (setup_position(&[(1, 0)]), Player::Two),
        (setup_position(&[(1, 2)]), Player::One),
        (setup_position(&[(1, 5), (2, 0), (1, 1)]), Player::Two),
        (
            BoardState::from_rows([[0, 3, 0, 1, 0, 2, 18], [1, 0, 4, 0, 0, 6, 13]]),
            Player::Two,
        ),
    ];

    for (board, player) in positions {
        for depth in 1..=5 {
            let pruned = Searcher::new(depth).search(&board, player);
            let full = Searcher::exhaustive(depth).search(&board, player);
            assert_eq!(
                pruned.best_move, full.best_move,
                "Depth {depth}, {player} to move:\n{board}"
            );
            assert_eq!(pruned.score, full.score);
            assert!(pruned.nodes <= full.nodes);
        }
    }
}

#[test]
fn test_search_does_not_touch_game_board() {
    let board = setup_position(&[(1, 3), (2, 4)]);
    let before = board;
    let _ = choose_move(&board, Player::One, 6);
    assert_eq!(board, before);
}
