use crate::{
    agent::Agent,
    board::Grid,
    common::{Coordinate, GameError, Player},
    config::MOVE_PROMPT,
    moves::parse_move,
    ui::{display_error, Console},
};

/// Ask for a move until a valid one is typed.
///
/// Every rejected line writes exactly one message to the error output. Only
/// the end of input stops the loop early.
pub fn prompt_for_move(grid: &Grid, console: &mut dyn Console) -> anyhow::Result<Coordinate> {
    loop {
        let line = console
            .read_line(MOVE_PROMPT)?
            .ok_or(GameError::InputClosed)?;
        match parse_move(&line, grid) {
            Ok(coord) => return Ok(coord),
            Err(e) => {
                log::debug!("rejected move {:?}: {:?}", line.trim(), e);
                display_error(console, &e);
            }
        }
    }
}

/// Human player typing `row col` at the console.
#[derive(Debug, Default)]
pub struct CliAgent;

impl CliAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for CliAgent {
    fn select_move(
        &mut self,
        grid: &Grid,
        _player: Player,
        console: &mut dyn Console,
    ) -> anyhow::Result<Coordinate> {
        prompt_for_move(grid, console)
    }
}
