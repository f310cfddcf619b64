use crate::common::Player;

/// Board dimension used when no size is requested.
pub const DEFAULT_SIZE: usize = 3;
/// Player who opens a game by default.
pub const FIRST_PLAYER: Player = Player::X;
/// Environment variable read by [`init_logging`](crate::init_logging).
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
/// Prompt shown before reading a move from the console.
pub const MOVE_PROMPT: &str = "Where would you like to go? ";

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Requested board dimension. Negative values are rejected when the grid is built.
    pub size: isize,
    pub first: Player,
}

impl GameConfig {
    pub const fn new(size: isize, first: Player) -> Self {
        Self { size, first }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE as isize,
            first: FIRST_PLAYER,
        }
    }
}
