//! Move execution: sowing, captures, and bonus turns.
//!
//! A move picks up every bead in one of the mover's pits and sows them one at
//! a time into the following cells. From the mover's point of view the cells
//! form a cycle of [`CYCLE_LEN`] slots:
//!
//! ```text
//! slot:   0  1  2  3  4  5 | 6     | 7  8  9  10 11 12
//! cell:   own pits 0-5     | store | opponent pits 0-5
//! ```
//!
//! The opponent's store is not on the cycle, so it never receives a bead.
//! Only the cell receiving the last bead can trigger a special rule.

use log::trace;
use thiserror::Error;

use crate::board::{BoardState, Player};
use crate::constants::{CYCLE_LEN, PITS, STORE};

/// Why a requested move was rejected. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid player {0}: valid options are 1, 2")]
    InvalidPlayer(u8),
    #[error("Invalid pit {0}: pit must be one of 0 - {max}", max = PITS - 1)]
    InvalidPitIndex(usize),
    #[error("Pit {0} must hold at least one bead")]
    EmptyPit(usize),
}

/// The board after a move, and whether the mover plays again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub board: BoardState,
    pub another_turn: bool,
}

/// Apply a move for the player with external id `player_id` (1 or 2) to a
/// copy of `state`.
///
/// # Errors
/// - [`MoveError::InvalidPlayer`] if `player_id` is not 1 or 2
/// - [`MoveError::InvalidPitIndex`] if `pit` is not in `0..6`
/// - [`MoveError::EmptyPit`] if the chosen pit holds no beads
pub fn apply_move(state: &BoardState, player_id: u8, pit: usize) -> Result<MoveResult, MoveError> {
    let player = Player::from_id(player_id).ok_or(MoveError::InvalidPlayer(player_id))?;
    let mut board = *state;
    let another_turn = play_move(&mut board, player, pit)?;
    Ok(MoveResult {
        board,
        another_turn,
    })
}

/// Check that `player` may sow from `pit` without touching the board.
pub fn validate_move(board: &BoardState, player: Player, pit: usize) -> Result<(), MoveError> {
    if pit >= PITS {
        return Err(MoveError::InvalidPitIndex(pit));
    }
    if board.pit_count(player, pit) == 0 {
        return Err(MoveError::EmptyPit(pit));
    }
    Ok(())
}

/// Play a move in place.
///
/// Returns `true` if the last bead landed in the mover's store and the mover
/// plays again. On error the board is unchanged.
pub fn play_move(board: &mut BoardState, player: Player, pit: usize) -> Result<bool, MoveError> {
    validate_move(board, player, pit)?;
    Ok(sow(board, player, pit))
}

/// Map a cycle slot to the cell it names.
#[inline]
fn slot_cell(player: Player, slot: usize) -> Cell {
    match slot {
        s if s < PITS => Cell::Pit(player, s),
        STORE => Cell::Store,
        s => Cell::Pit(player.opponent(), s - PITS - 1),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Pit(Player, usize),
    /// The mover's store.
    Store,
}

/// Sow the beads of a validated, non-empty pit and resolve the last bead.
fn sow(board: &mut BoardState, player: Player, pit: usize) -> bool {
    let mut beads = board.clear_pit(player, pit);
    let mut slot = pit;
    let mut last = Cell::Store;

    while beads > 0 {
        slot = (slot + 1) % CYCLE_LEN;
        last = slot_cell(player, slot);
        match last {
            Cell::Pit(owner, idx) => board.add_to_pit(owner, idx, 1),
            Cell::Store => board.add_to_store(player, 1),
        }
        beads -= 1;
    }

    match last {
        Cell::Store => {
            trace!("{player} pit {pit}: last bead in store, another turn");
            true
        }
        Cell::Pit(owner, idx) if owner == player && board.pit_count(player, idx) == 1 => {
            let opposite = PITS - 1 - idx;
            let bounty = board.clear_pit(player.opponent(), opposite) + board.clear_pit(player, idx);
            board.add_to_store(player, bounty);
            trace!("{player} pit {pit}: capture at {idx} takes {bounty}");
            false
        }
        Cell::Pit(..) => false,
    }
}
