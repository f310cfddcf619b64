#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod agent;
mod agent_cli;
mod agent_random;
mod board;
mod common;
mod config;
mod game;
pub mod grid;
#[cfg(feature = "std")]
mod logging;
mod moves;
pub mod prelude;
mod session;
pub mod ui;
pub mod win;

pub use agent::*;
pub use agent_cli::*;
pub use agent_random::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use moves::*;
pub use session::*;
pub use ui::*;
pub use win::*;
