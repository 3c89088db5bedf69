//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The evaluation is always from Player One's point of view: Player One's
//! store minus Player Two's store. Player One maximizes and Player Two
//! minimizes. Which role a node plays depends on whose turn it is at that
//! node, not on its depth, since a bonus turn keeps the same player moving.
//!
//! The search works on its own scratch copy of the board. Each child is
//! explored by playing the move in place and restoring a snapshot of the
//! board afterwards, so siblings always start from the same position.

use log::debug;

use crate::board::{BoardState, Player};
use crate::constants::{DEFAULT_DEPTH, PITS, SCORE_INF};
use crate::moves::play_move;
use crate::outcome::is_terminal;

/// The player whose gains count as positive scores.
const MAXIMIZER: Player = Player::One;

/// Search result containing the recommended pit and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Recommended pit, or `None` if the player to move has no legal pit
    pub best_move: Option<usize>,
    /// Minimax value of the root (Player One store minus Player Two store)
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Minimax searcher with a fixed depth.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u32,
    prune: bool,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Searcher {
    /// Create an alpha-beta searcher looking `depth` plies ahead.
    /// A depth of zero searches one ply.
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            prune: true,
            nodes: 0,
        }
    }

    /// Plain minimax without pruning. Visits every node up to `depth`; used
    /// as a reference for the pruned search.
    pub fn exhaustive(depth: u32) -> Self {
        Self {
            prune: false,
            ..Self::new(depth)
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Search the position with `player` to move. `board` is not modified.
    pub fn search(&mut self, board: &BoardState, player: Player) -> SearchResult {
        self.nodes = 0;
        let mut scratch = *board;
        let (score, best_move) = self.minimax(&mut scratch, player, self.depth, -SCORE_INF, SCORE_INF);
        debug_assert_eq!(scratch, *board, "search leaked a move into the root board");

        debug!(
            "{player} depth {}: best {:?} score {score} nodes {}",
            self.depth, best_move, self.nodes
        );
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn minimax(
        &mut self,
        board: &mut BoardState,
        to_move: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<usize>) {
        self.nodes += 1;

        if is_terminal(board) {
            return (swept_differential(board), None);
        }
        if depth == 0 {
            return (store_differential(board), None);
        }

        let maximizing = to_move == MAXIMIZER;
        let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
        let mut best_move = None;

        for pit in 0..PITS {
            if board.pit_count(to_move, pit) == 0 {
                continue;
            }
            let snapshot = *board;
            let another_turn =
                play_move(board, to_move, pit).expect("non-empty pit is a legal move");
            let next = if another_turn { to_move } else { to_move.opponent() };
            let (value, _) = self.minimax(board, next, depth - 1, alpha, beta);
            *board = snapshot;

            if maximizing {
                if value > best {
                    best = value;
                    best_move = Some(pit);
                }
                if self.prune {
                    alpha = alpha.max(best);
                    if best >= beta {
                        break;
                    }
                }
            } else {
                if value < best {
                    best = value;
                    best_move = Some(pit);
                }
                if self.prune {
                    beta = beta.min(best);
                    if best <= alpha {
                        break;
                    }
                }
            }
        }

        if best_move.is_none() {
            // No pit to sow from: score it as a leaf.
            return (store_differential(board), None);
        }
        (best, best_move)
    }
}

/// Pick a pit for `player` using an alpha-beta search of `depth` plies.
///
/// Returns `None` only if `player` has no beads in any pit. A `depth` of zero
/// is treated as one.
pub fn choose_move(board: &BoardState, player: Player, depth: u32) -> Option<usize> {
    Searcher::new(depth).search(board, player).best_move
}

fn store_differential(board: &BoardState) -> i32 {
    board.store_count(Player::One) as i32 - board.store_count(Player::Two) as i32
}

/// Differential as if the end-of-game sweep had already happened.
fn swept_differential(board: &BoardState) -> i32 {
    let p1 = board.store_count(Player::One) + board.total_in_pits(Player::One);
    let p2 = board.store_count(Player::Two) + board.total_in_pits(Player::Two);
    p1 as i32 - p2 as i32
}
