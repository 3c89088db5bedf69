//! Turn driver: whose move it is, who controls each side, and when the game ends.
//!
//! The rules engine never learns how a pit was chosen. A [`Controller`] only
//! decides whether the driver waits for a human or asks the search.

use log::debug;
use thiserror::Error;

use crate::board::{BoardState, Player};
use crate::constants::DEFAULT_DEPTH;
use crate::moves::{MoveError, play_move};
use crate::outcome::{FinalScore, finalize, is_terminal};
use crate::search::Searcher;

/// Who picks the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer { depth: u32 },
}

impl Default for Controller {
    fn default() -> Self {
        Controller::Computer {
            depth: DEFAULT_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
    #[error("the game is already over")]
    GameOver,
}

/// What happened on one call to [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub pit: usize,
    /// The same player moves again.
    pub another_turn: bool,
    /// Set once the move ended the game.
    pub finished: Option<FinalScore>,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    to_move: Player,
    controllers: [Controller; 2],
    result: Option<FinalScore>,
}

impl Game {
    /// Standard start with Player One to move.
    pub fn new(p1: Controller, p2: Controller) -> Self {
        Self::from_board(BoardState::new(), Player::One, p1, p2)
    }

    /// Start from an arbitrary position.
    pub fn from_board(board: BoardState, to_move: Player, p1: Controller, p2: Controller) -> Self {
        let mut game = Self {
            board,
            to_move,
            controllers: [p1, p2],
            result: None,
        };
        game.check_finished();
        game
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn controller(&self, player: Player) -> Controller {
        self.controllers[player.side()]
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Final scores, once the game is over.
    pub fn result(&self) -> Option<FinalScore> {
        self.result
    }

    /// Current store counts `(p1, p2)`.
    pub fn results(&self) -> (u32, u32) {
        (
            self.board.store_count(Player::One),
            self.board.store_count(Player::Two),
        )
    }

    /// Play `pit` for the player to move.
    ///
    /// On a bonus turn the same player stays to move; otherwise the turn
    /// passes. A rejected move leaves the game unchanged.
    pub fn play(&mut self, pit: usize) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.to_move;
        let another_turn = play_move(&mut self.board, player, pit)?;
        debug!("{player} plays pit {pit}, another turn: {another_turn}");

        let finished = self.check_finished();
        if finished.is_none() && !another_turn {
            self.to_move = player.opponent();
        }
        Ok(Turn {
            player,
            pit,
            another_turn: another_turn && finished.is_none(),
            finished,
        })
    }

    /// Ask the search for a pit when the player to move is computer-controlled.
    /// Returns `None` for a human player or a finished game.
    pub fn computer_move(&self) -> Option<usize> {
        if self.is_over() {
            return None;
        }
        match self.controller(self.to_move) {
            Controller::Human => None,
            Controller::Computer { depth } => {
                Searcher::new(depth).search(&self.board, self.to_move).best_move
            }
        }
    }

    fn check_finished(&mut self) -> Option<FinalScore> {
        if self.result.is_none() && is_terminal(&self.board) {
            self.result = Some(finalize(&mut self.board));
        }
        self.result
    }
}
