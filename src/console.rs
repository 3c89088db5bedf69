//! Text console: renders the board and turns typed lines into moves.
//!
//! Human players type a pit index (`0` - `5`) at the prompt. Other inputs:
//!
//! - `hint` - Show the pit the search would choose
//! - `quit` - Leave the game
//!
//! Invalid input and rejected moves are reported and the same player is
//! prompted again. Computer-controlled players move without prompting.
//!
//! ## Example
//!
//! ```no_run
//! use mancala_rust::console::Console;
//! use mancala_rust::game::{Controller, Game};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut console = Console::new(Game::new(Controller::Human, Controller::default()));
//! console.run(std::io::stdin().lock(), std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::board::{BoardState, Player};
use crate::constants::{DEFAULT_DEPTH, PITS};
use crate::game::{Controller, Game};
use crate::outcome::FinalScore;
use crate::search::Searcher;

/// The board drawn from one player's side of the table: the opponent's row
/// on top, running right to left, with the opponent's store on the left and
/// the viewer's store on the right.
pub struct BoardView<'a> {
    board: &'a BoardState,
    pov: Player,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a BoardState, pov: Player) -> Self {
        Self { board, pov }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opponent = self.pov.opponent();
        let border = format!("|{}|", "-".repeat(3 * PITS + 10));

        writeln!(f, "{border}")?;
        write!(f, "|     ")?;
        for count in self.board.pits(opponent).iter().rev() {
            write!(f, "{count:>3}")?;
        }
        writeln!(f, "     |")?;
        writeln!(
            f,
            "| {:>3}{}{:<3} |",
            self.board.store_count(opponent),
            " ".repeat(3 * PITS + 2),
            self.board.store_count(self.pov)
        )?;
        write!(f, "|     ")?;
        for count in self.board.pits(self.pov) {
            write!(f, "{count:>3}")?;
        }
        writeln!(f, "     |")?;
        writeln!(f, "{border}")?;
        write!(f, "      ")?;
        for pit in 0..PITS {
            write!(f, "{pit:>3}")?;
        }
        writeln!(f)
    }
}

/// One line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Pit(usize),
    Hint,
    Quit,
    Empty,
    Invalid,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Input::Empty;
    }
    match line.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Input::Quit,
        "hint" => Input::Hint,
        other => other.parse().map(Input::Pit).unwrap_or(Input::Invalid),
    }
}

/// Console session driving a [`Game`] to completion.
pub struct Console {
    game: Game,
}

impl Console {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until the game ends, the human quits, or `input` runs out.
    ///
    /// Returns the final score if the game was played to the end.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<Option<FinalScore>> {
        let mut lines = input.lines();

        loop {
            if let Some(score) = self.game.result() {
                write!(output, "{}", BoardView::new(self.game.board(), Player::One))?;
                write_results(&mut output, &score)?;
                return Ok(Some(score));
            }

            let player = self.game.to_move();
            match self.game.controller(player) {
                Controller::Computer { .. } => {
                    let pit = self
                        .game
                        .computer_move()
                        .with_context(|| format!("{player} has no legal move"))?;
                    writeln!(output, "{player} plays pit {pit}")?;
                    self.play(pit, &mut output)?;
                }
                Controller::Human => {
                    write!(output, "{}", BoardView::new(self.game.board(), player))?;
                    write!(output, "{player}, select a pit to move <0 - {}>: ", PITS - 1)?;
                    output.flush()?;

                    let Some(line) = lines.next() else {
                        return Ok(None);
                    };
                    match parse_input(&line?) {
                        Input::Pit(pit) => self.play(pit, &mut output)?,
                        Input::Hint => {
                            let hint = Searcher::new(DEFAULT_DEPTH)
                                .search(self.game.board(), player)
                                .best_move;
                            if let Some(pit) = hint {
                                writeln!(output, "Hint: pit {pit}")?;
                            }
                        }
                        Input::Quit => return Ok(None),
                        Input::Empty => {}
                        Input::Invalid => writeln!(
                            output,
                            "Invalid input, must be an integer <0 - {}>",
                            PITS - 1
                        )?,
                    }
                }
            }
        }
    }

    fn play<W: Write>(&mut self, pit: usize, output: &mut W) -> Result<()> {
        let player = self.game.to_move();
        match self.game.play(pit) {
            Ok(turn) if turn.another_turn => writeln!(output, "{player} gets another turn")?,
            Ok(_) => {}
            Err(err) => writeln!(output, "{err}")?,
        }
        Ok(())
    }
}

fn write_results<W: Write>(output: &mut W, score: &FinalScore) -> Result<()> {
    writeln!(output, "game over! results:")?;
    writeln!(output, "Player 1: {}", score.p1_score)?;
    writeln!(output, "Player 2: {}", score.p2_score)?;
    match score.winner {
        Some(player) => writeln!(output, "{player} wins")?,
        None => writeln!(output, "Tie")?,
    }
    Ok(())
}
