use crate::{board::Grid, common::{Coordinate, Player}, ui::Console};

/// Interface implemented by everything that can take a seat at the board.
///
/// An agent is responsible for:
/// - Choosing a free cell for the player it sits for
/// - Reporting anything it wants the players to see through the console
pub trait Agent {
    /// Pick the next move for `player` on `grid`.
    ///
    /// The returned coordinate must be on the board and blank.
    fn select_move(
        &mut self,
        grid: &Grid,
        player: Player,
        console: &mut dyn Console,
    ) -> anyhow::Result<Coordinate>;

    /// Inform the agent that a game it sat in has finished.
    fn handle_game_over(&mut self, _grid: &Grid, _winner: Option<Player>) {}
}
