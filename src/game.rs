use alloc::vec::Vec;

use crate::{
    board::Grid,
    common::{Coordinate, GameError, Player},
    win,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    /// `true` for `Won` and `Tied`; no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// The player who moves after `player`.
pub fn next_player(player: Player) -> Player {
    player.next()
}

/// Core game logic: the current board, whose turn it is and the move history.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    to_move: Player,
    status: GameStatus,
    history: Vec<(Player, Coordinate)>,
}

impl GameEngine {
    /// Start from `grid` with `first` to move.
    pub fn new(grid: Grid, first: Player) -> Self {
        let status = win::evaluate(&grid);
        Self {
            grid,
            to_move: first,
            status,
            history: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player whose turn it is. After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves in the order they were played.
    pub fn history(&self) -> &[(Player, Coordinate)] {
        &self.history
    }

    /// Play `coord` for the current player and re-evaluate the board.
    ///
    /// The turn passes to the other player only while the game is still in
    /// progress.
    pub fn play(&mut self, coord: Coordinate) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        match self.grid.cell(coord) {
            Some(cell) if !cell.is_blank() => return Err(GameError::Occupied(coord)),
            _ => {}
        }
        let player = self.to_move;
        self.grid = self.grid.apply_move(coord, player)?;
        self.history.push((player, coord));
        self.status = win::evaluate(&self.grid);
        log::debug!("{} played {} -> {:?}", player, coord, self.status);
        if !self.status.is_terminal() {
            self.to_move = next_player(player);
        }
        Ok(self.status)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Grid::default(), crate::config::FIRST_PLAYER)
    }
}
