#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, Agent, CliAgent, GameConfig, GameEngine, GameSession, Grid, Player,
    RandomAgent, StdConsole, DEFAULT_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Mark {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns at this console (the default).
    Local {
        #[arg(long, default_value_t = DEFAULT_SIZE as isize, allow_negative_numbers = true)]
        size: isize,
        #[arg(long, value_enum, default_value_t = Mark::X)]
        first: Mark,
    },
    /// Play against a computer opponent that picks random free cells.
    Computer {
        #[arg(long, default_value_t = DEFAULT_SIZE as isize, allow_negative_numbers = true)]
        size: isize,
        #[arg(long, value_enum, default_value_t = Mark::X)]
        first: Mark,
        #[arg(long, value_enum, default_value_t = Mark::X, help = "Which mark the human plays")]
        play_as: Mark,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Local {
        size: DEFAULT_SIZE as isize,
        first: Mark::X,
    });

    match command {
        Commands::Local { size, first } => {
            let config = GameConfig::new(size, first.into());
            run(config, Box::new(CliAgent::new()), Box::new(CliAgent::new()))?;
        }
        Commands::Computer {
            size,
            first,
            play_as,
            seed,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let computer = match seed {
                Some(s) => RandomAgent::from_seed(s),
                None => RandomAgent::from_entropy(),
            };
            let config = GameConfig::new(size, first.into());
            let human: Box<dyn Agent> = Box::new(CliAgent::new());
            let computer: Box<dyn Agent> = Box::new(computer);
            match Player::from(play_as) {
                Player::X => run(config, human, computer)?,
                Player::O => run(config, computer, human)?,
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run(config: GameConfig, x: Box<dyn Agent>, o: Box<dyn Agent>) -> anyhow::Result<()> {
    let grid = Grid::empty(config.size)?;
    log::info!("starting {}x{} game, {} moves first", grid.size(), grid.size(), config.first);
    let engine = GameEngine::new(grid, config.first);
    let mut session = GameSession::new(engine, x, o, StdConsole::new());
    session.run()?;
    Ok(())
}
