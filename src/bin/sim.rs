use serde_json::json;
use tictactoe::{
    init_logging, GameEngine, GameSession, Grid, RandomAgent, ScriptedConsole, DEFAULT_SIZE,
    FIRST_PLAYER,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <seed1> <seed2> [size]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let size: isize = match args.get(3) {
        Some(s) => s.parse()?,
        None => DEFAULT_SIZE as isize,
    };

    let engine = GameEngine::new(Grid::empty(size)?, FIRST_PLAYER);
    let mut session = GameSession::new(
        engine,
        Box::new(RandomAgent::from_seed(seed1)),
        Box::new(RandomAgent::from_seed(seed2)),
        ScriptedConsole::default(),
    );
    let status = session.run()?;

    let engine = session.engine();
    let board: Vec<String> = engine
        .grid()
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect();
    let result = json!({
        "winner": status.winner().map(|p| p.to_string()),
        "status": serde_json::to_value(status)?,
        "moves": engine.history().len(),
        "board": board,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
