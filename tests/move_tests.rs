use tictactoe::{
    parse_move, prompt_for_move, Cell, Coordinate, GameError, Grid, MoveError, ScriptedConsole,
    MOVE_PROMPT,
};

use Cell::{Blank as B, O, X};

const SYNTAX: &str = "Invalid move! Move must have syntax \"row col\"";
const BOUNDS: &str = "Invalid move! Move must be in bounds of board";
const OCCUPIED: &str = "Invalid move! This space is already occupied";

fn board() -> Grid {
    Grid::from(vec![vec![X, O, B], vec![B, O, X], vec![X, X, O]])
}

#[test]
fn test_error_messages() {
    assert_eq!(MoveError::Syntax.to_string(), SYNTAX);
    assert_eq!(MoveError::OutOfBounds.to_string(), BOUNDS);
    assert_eq!(MoveError::Occupied.to_string(), OCCUPIED);
}

#[test]
fn test_parse_move_syntax() {
    let board = board();
    for input in ["1,", "", "0", "a b", "1 b", "1.5 0", "0 1 2", "1,0"] {
        assert_eq!(parse_move(input, &board), Err(MoveError::Syntax), "input {:?}", input);
    }
}

#[test]
fn test_parse_move_out_of_bounds() {
    let board = board();
    for input in [
        "0 5",
        "5 0",
        "-1 0",
        "0 -1",
        "3 3",
        "99999999999999999999 0",
        "-99999999999999999999 0",
        "0 99999999999999999999",
    ] {
        assert_eq!(
            parse_move(input, &board),
            Err(MoveError::OutOfBounds),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_parse_move_accepts_any_whitespace_between_numbers() {
    let board = board();
    assert_eq!(parse_move("0  2", &board), Ok(Coordinate::new(0, 2)));
    assert_eq!(parse_move("0\t2", &board), Ok(Coordinate::new(0, 2)));
    assert_eq!(parse_move("  2 1  ", &board), Ok(Coordinate::new(2, 1)));
}

#[test]
fn test_parse_move_occupied() {
    let board = board();
    assert_eq!(parse_move("0 0", &board), Err(MoveError::Occupied));
    assert_eq!(parse_move("1 1", &board), Err(MoveError::Occupied));
}

#[test]
fn test_parse_move_valid() {
    let board = board();
    assert_eq!(parse_move("0 2", &board), Ok(Coordinate::new(0, 2)));
    assert_eq!(parse_move("1 0\n", &board), Ok(Coordinate::new(1, 0)));
}

#[test]
fn test_parse_move_zero_is_a_number() {
    let grid = Grid::default();
    assert_eq!(parse_move("0 0", &grid), Ok(Coordinate::new(0, 0)));
}

#[test]
fn test_parse_move_empty_board_is_always_out_of_bounds() {
    let grid = Grid::empty(0).unwrap();
    assert_eq!(parse_move("0 0", &grid), Err(MoveError::OutOfBounds));
}

#[test]
fn test_prompt_valid_first_try() {
    let mut console = ScriptedConsole::new(["1 0"]);
    let coord = prompt_for_move(&board(), &mut console).unwrap();
    assert_eq!(coord, Coordinate::new(1, 0));
    assert!(console.errors().is_empty());
    assert_eq!(console.prompts(), &[MOVE_PROMPT.to_string()]);
}

#[test]
fn test_prompt_retries_and_reports_each_error() {
    let mut console = ScriptedConsole::new(["5 0", "0", "0 0", "1 0", "0 2"]);
    let coord = prompt_for_move(&board(), &mut console).unwrap();
    assert_eq!(coord, Coordinate::new(1, 0));
    assert_eq!(console.errors(), &[BOUNDS, SYNTAX, OCCUPIED]);
    assert_eq!(console.prompts().len(), 4);
    assert_eq!(console.remaining_input(), 1);
    assert!(console.output().is_empty());
}

#[test]
fn test_prompt_fails_when_input_runs_out() {
    let mut console = ScriptedConsole::new(["nope"]);
    let err = prompt_for_move(&board(), &mut console).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GameError>(),
        Some(&GameError::InputClosed)
    );
    assert_eq!(console.errors(), &[SYNTAX]);
}
