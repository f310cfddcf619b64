//! Console collaborator and the game's display messages.
//!
//! All output of the game loop goes through a [`Console`], so tests can swap
//! the terminal for a [`ScriptedConsole`] and inspect what was written.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::board::Grid;
use crate::common::Player;

/// Line-oriented text I/O used by the game loop and console players.
pub trait Console {
    /// Write one line to the regular output.
    fn write_line(&mut self, line: &str);

    /// Write one line to the error output.
    fn write_error(&mut self, line: &str);

    /// Show `prompt` and block until a line is entered.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Show the board and tell `player` it is their turn.
pub fn display_turn(console: &mut dyn Console, grid: &Grid, player: Player) {
    console.write_line(&grid.render());
    console.write_line(&format!("{} it is your turn", player));
}

/// Show the final board and congratulate `player`.
pub fn display_win(console: &mut dyn Console, grid: &Grid, player: Player) {
    console.write_line(&grid.render());
    console.write_line(&format!("Congratulations! {} wins", player));
}

/// Show the final, full board.
pub fn display_tie(console: &mut dyn Console, grid: &Grid) {
    console.write_line(&grid.render());
    console.write_line("It's a tie! No one wins");
}

/// Print a rejected move to the error output.
pub fn display_error(console: &mut dyn Console, error: &dyn core::fmt::Display) {
    console.write_error(&error.to_string());
}

/// [`Console`] backed by the process's stdin, stdout and stderr.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdConsole;

#[cfg(feature = "std")]
impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "std")]
impl Console for StdConsole {
    fn write_line(&mut self, line: &str) {
        std::println!("{}", line);
    }

    fn write_error(&mut self, line: &str) {
        std::eprintln!("{}", line);
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        use std::io::{self, BufRead, Write};

        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// In-memory [`Console`] fed from a fixed list of input lines.
///
/// Everything written is recorded; prompts are recorded separately.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    errors: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines written to the regular output.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Lines written to the error output.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Prompts shown, one per line read.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Input lines not consumed yet.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn write_error(&mut self, line: &str) {
        self.errors.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }
}
