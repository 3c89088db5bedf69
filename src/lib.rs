//! Mancala-Rust: Kalah rules engine and minimax opponent.
//!
//! This crate provides the Kalah variant of Mancala (six pits and a store
//! per side) together with a depth-limited alpha-beta search that picks moves
//! for a computer player.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and search parameters
//! - [`board`] - Board state and players
//! - [`moves`] - Sowing, captures, bonus turns, and move validation
//! - [`outcome`] - End-of-game detection and final scoring
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`game`] - Turn driver for human and computer players
//! - [`console`] - Text board rendering and human input
//!
//! ## Example
//!
//! ```
//! use mancala_rust::board::{BoardState, Player};
//! use mancala_rust::moves::apply_move;
//! use mancala_rust::search::choose_move;
//!
//! // Player 1 sows pit 2; the last bead lands in the store.
//! let result = apply_move(&BoardState::new(), 1, 2).unwrap();
//! assert!(result.another_turn);
//!
//! // Let the search pick Player 1's next move.
//! let pit = choose_move(&result.board, Player::One, 4).unwrap();
//! assert!(result.board.pit_count(Player::One, pit) > 0);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod moves;
pub mod outcome;
pub mod search;
