//! Mancala-Rust: play Kalah in the terminal.
//!
//! ## Usage
//!
//! - `mancala-rust` - Human (Player 1) against the computer (Player 2)
//! - `mancala-rust play --p1 computer --p2 human --depth 6` - Pick the sides
//! - `mancala-rust demo` - Watch the computer play itself
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use mancala_rust::board::{BoardState, Player};
use mancala_rust::console::Console;
use mancala_rust::constants::{DEFAULT_BEADS, DEFAULT_DEPTH, MAX_BEADS};
use mancala_rust::game::{Controller, Game};

/// Mancala-Rust: Kalah with a minimax opponent
#[derive(Parser)]
#[command(name = "mancala-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Who controls Player 1
        #[arg(long, value_enum, default_value_t = Kind::Human)]
        p1: Kind,
        /// Who controls Player 2
        #[arg(long, value_enum, default_value_t = Kind::Computer)]
        p2: Kind,
        /// Search depth (plies) for computer players
        #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
        depth: u32,
        /// Beads in each pit at the start
        #[arg(long, default_value_t = DEFAULT_BEADS, value_parser = clap::value_parser!(u32).range(1..=MAX_BEADS as i64))]
        beads: u32,
    },
    /// Let the computer play both sides
    Demo {
        /// Search depth (plies) for both players
        #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
        depth: u32,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Human,
    Computer,
}

impl Kind {
    fn controller(self, depth: u32) -> Controller {
        match self {
            Kind::Human => Controller::Human,
            Kind::Computer => Controller::Computer { depth },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let game = match cli.command {
        Some(Commands::Play {
            p1,
            p2,
            depth,
            beads,
        }) => Game::from_board(
            BoardState::with_beads(beads),
            Player::One,
            p1.controller(depth),
            p2.controller(depth),
        ),
        Some(Commands::Demo { depth }) => Game::new(
            Controller::Computer { depth },
            Controller::Computer { depth },
        ),
        None => Game::new(Controller::Human, Controller::default()),
    };

    let mut console = Console::new(game);
    console.run(io::stdin().lock(), io::stdout())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beads_arg(value: &str) -> Result<u32, clap::Error> {
        match Cli::try_parse_from(["mancala-rust", "play", "--beads", value])?.command {
            Some(Commands::Play { beads, .. }) => Ok(beads),
            _ => unreachable!("play subcommand parsed"),
        }
    }

    #[test]
    fn test_beads_range() {
        assert_eq!(beads_arg("4").unwrap(), 4);
        assert_eq!(beads_arg(&MAX_BEADS.to_string()).unwrap(), MAX_BEADS);
        assert!(beads_arg("0").is_err());
        assert!(beads_arg(&(MAX_BEADS + 1).to_string()).is_err());
        assert!(beads_arg("800000000").is_err());
    }

    #[test]
    fn test_depth_must_be_positive() {
        assert!(Cli::try_parse_from(["mancala-rust", "demo", "--depth", "0"]).is_err());
        assert!(Cli::try_parse_from(["mancala-rust", "demo", "--depth", "3"]).is_ok());
    }
}
