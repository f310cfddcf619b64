use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{Cell, Coordinate, Grid, Player};

fn random_grid(seed: u64, size: usize) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let rows: Vec<Vec<Cell>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| match rng.random_range(0..3) {
                    0 => Cell::Blank,
                    1 => Cell::X,
                    _ => Cell::O,
                })
                .collect()
        })
        .collect();
    Grid::from(rows)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn empty_grid_is_square_and_blank(n in 0isize..12) {
        let grid = Grid::empty(n).unwrap();
        prop_assert_eq!(grid.size(), n as usize);
        for row in grid.rows() {
            prop_assert_eq!(row.len(), n as usize);
            prop_assert!(row.iter().all(|c| c.is_blank()));
        }
    }

    #[test]
    fn negative_sizes_are_rejected(n in isize::MIN..0) {
        prop_assert!(Grid::empty(n).is_err());
    }

    #[test]
    fn apply_move_changes_exactly_one_cell(
        seed in any::<u64>(),
        size in 1usize..7,
        row in 0usize..7,
        col in 0usize..7,
        is_x in any::<bool>()
    ) {
        let (row, col) = (row % size, col % size);
        let player = if is_x { Player::X } else { Player::O };
        let before = random_grid(seed, size);
        let snapshot = before.clone();
        let after = before.apply_move(Coordinate::new(row, col), player).unwrap();

        prop_assert_eq!(&before, &snapshot);
        for r in 0..size {
            for c in 0..size {
                let coord = Coordinate::new(r, c);
                if (r, c) == (row, col) {
                    prop_assert_eq!(after.cell(coord), Some(player.cell()));
                } else {
                    prop_assert_eq!(after.cell(coord), before.cell(coord));
                }
            }
        }
    }

    #[test]
    fn rendered_rows_match_board_height(seed in any::<u64>(), size in 1usize..7) {
        let grid = random_grid(seed, size);
        let rendered = grid.render();
        // one line per row plus one separator between each pair
        prop_assert_eq!(rendered.lines().count(), 2 * size - 1);
    }
}
