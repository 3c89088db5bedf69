//! End-of-game detection and final scoring.
//!
//! The game ends as soon as either side's playable pits are all empty.
//! Detecting that and scoring it are separate steps: [`evaluate`] only looks,
//! while [`finalize`] sweeps the remaining beads into their owners' stores.

use log::info;

use crate::board::{BoardState, Player};

/// State of the game as seen from the board alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Winner(Player),
    Tie,
}

/// Scores after the final sweep. `winner` is `None` on a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub p1_score: u32,
    pub p2_score: u32,
    pub winner: Option<Player>,
}

impl FinalScore {
    pub fn outcome(&self) -> Outcome {
        match self.winner {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Tie,
        }
    }
}

/// True iff either side has no beads left in its pits.
pub fn is_terminal(board: &BoardState) -> bool {
    board.total_in_pits(Player::One) == 0 || board.total_in_pits(Player::Two) == 0
}

/// Report the outcome the board would have if it were finalized now,
/// without modifying it.
pub fn evaluate(board: &BoardState) -> Outcome {
    if !is_terminal(board) {
        return Outcome::InProgress;
    }
    let mut swept = *board;
    score_swept(&mut swept).outcome()
}

/// Sweep both sides into their stores and compare the stores.
///
/// Must only be called on a terminal board.
pub fn finalize(board: &mut BoardState) -> FinalScore {
    debug_assert!(is_terminal(board), "finalize called on a game in progress");
    let score = score_swept(board);
    info!(
        "game over: {} - {} ({:?})",
        score.p1_score,
        score.p2_score,
        score.outcome()
    );
    score
}

fn score_swept(board: &mut BoardState) -> FinalScore {
    board.sweep_into_store(Player::One);
    board.sweep_into_store(Player::Two);

    let p1_score = board.store_count(Player::One);
    let p2_score = board.store_count(Player::Two);
    let winner = match p1_score.cmp(&p2_score) {
        std::cmp::Ordering::Greater => Some(Player::One),
        std::cmp::Ordering::Less => Some(Player::Two),
        std::cmp::Ordering::Equal => None,
    };
    FinalScore {
        p1_score,
        p2_score,
        winner,
    }
}
