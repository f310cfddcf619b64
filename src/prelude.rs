//! Commonly used types and utilities for ease of import.

pub use crate::{
    Agent, CliAgent, Coordinate, GameConfig, GameEngine, GameSession, GameStatus, Grid, Player,
    RandomAgent, ScriptedConsole,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, StdConsole};
