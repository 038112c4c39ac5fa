//! The prompt / move / print loop around one `GameState`

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chess_rules::{GameState, MoveResult, Square};
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::input::{parse_square, square_name};
use crate::render::render;

const START_PROMPT: &str = "Enter start position (e.g., 'e2'): ";
const END_PROMPT: &str = "Enter end position (e.g., 'e4'): ";

/// Move counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: u32,
    pub rejected: u32,
}

pub struct Session<R, W> {
    game: GameState,
    config: GameConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            game: GameState::new(),
            config,
            input,
            output,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Play until the input ends or the player types `quit` / `exit`.
    pub fn run(&mut self) -> anyhow::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.print_board()?;

        loop {
            if self.config.announce_turn {
                writeln!(self.output, "{}'s turn", self.game.turn())?;
            }
            let Some(start) = self.prompt_square(START_PROMPT)? else {
                break;
            };
            let Some(end) = self.prompt_square(END_PROMPT)? else {
                break;
            };

            match self.game.attempt_move(start, end) {
                MoveResult::Accepted => {
                    summary.accepted += 1;
                    info!(from = %square_name(start), to = %square_name(end), "played");
                    if self.config.show_board {
                        self.print_board()?;
                    }
                }
                MoveResult::Rejected(reason) => {
                    summary.rejected += 1;
                    info!(from = %square_name(start), to = %square_name(end), %reason, "refused");
                    writeln!(self.output, "Invalid move, try again.")?;
                }
            }
        }

        self.output.flush()?;
        Ok(summary)
    }

    fn print_board(&mut self) -> anyhow::Result<()> {
        let text = render(self.game.snapshot_for_display());
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Ask until a square parses. `None` once input is exhausted or the player quits.
    fn prompt_square(&mut self, prompt: &str) -> anyhow::Result<Option<Square>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                // The offending line has been consumed; the next read starts fresh.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(error = %e, "input line is not UTF-8");
                    writeln!(self.output, "input is not valid text, try again.")?;
                    continue;
                }
                Err(e) => return Err(e).context("Failed to read input"),
            }

            let text = line.trim();
            if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }
            match parse_square(text) {
                Ok(sq) => return Ok(Some(sq)),
                Err(e) => {
                    warn!(input = text, "unparseable square");
                    writeln!(self.output, "{e}, try again.")?;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
