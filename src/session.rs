use alloc::boxed::Box;

use crate::{
    agent::Agent,
    board::Grid,
    common::Player,
    game::{GameEngine, GameStatus},
    ui::{display_tie, display_turn, display_win, Console},
};

/// Runs one game: an engine, one agent per player and the console they share.
pub struct GameSession<C: Console> {
    engine: GameEngine,
    x: Box<dyn Agent>,
    o: Box<dyn Agent>,
    console: C,
}

impl<C: Console> GameSession<C> {
    pub fn new(engine: GameEngine, x: Box<dyn Agent>, o: Box<dyn Agent>, console: C) -> Self {
        Self {
            engine,
            x,
            o,
            console,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Give back the console, e.g. to inspect a scripted transcript.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Play a single turn for the current player.
    ///
    /// Shows the board, asks the player's agent for a move and applies it.
    /// A finished game is announced before returning its status.
    pub fn play_turn(&mut self) -> anyhow::Result<GameStatus> {
        let player = self.engine.current_player();
        display_turn(&mut self.console, self.engine.grid(), player);

        let agent = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        let coord = agent.select_move(self.engine.grid(), player, &mut self.console)?;
        let status = self.engine.play(coord)?;

        match status {
            GameStatus::Won(winner) => {
                log::info!("{} wins after {} moves", winner, self.engine.history().len());
                display_win(&mut self.console, self.engine.grid(), winner);
                self.finish(Some(winner));
            }
            GameStatus::Tied => {
                log::info!("tie after {} moves", self.engine.history().len());
                display_tie(&mut self.console, self.engine.grid());
                self.finish(None);
            }
            GameStatus::InProgress => {}
        }
        Ok(status)
    }

    /// Play turns until the game is won or tied.
    ///
    /// A board that starts out finished (e.g. zero-sized) is announced as is.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        match self.engine.status() {
            GameStatus::Won(winner) => {
                display_win(&mut self.console, self.engine.grid(), winner);
                return Ok(self.engine.status());
            }
            GameStatus::Tied => {
                display_tie(&mut self.console, self.engine.grid());
                return Ok(self.engine.status());
            }
            GameStatus::InProgress => {}
        }
        loop {
            let status = self.play_turn()?;
            if status.is_terminal() {
                return Ok(status);
            }
        }
    }

    fn finish(&mut self, winner: Option<Player>) {
        let grid: &Grid = self.engine.grid();
        self.x.handle_game_over(grid, winner);
        self.o.handle_game_over(grid, winner);
    }
}
