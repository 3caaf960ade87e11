//! BoardEngine integration tests.
//!
//! Covers the worked examples for toggling and winning on small boards,
//! plus seeded board creation.

use lights_out::{BoardConfig, BoardEngine, BoardRng, CellSource, Coord, Grid};

fn lit(grid: &Grid, row: i64, col: i64) -> bool {
    grid.get(Coord::new(row, col)).unwrap()
}

// =============================================================================
// Toggle Scenarios
// =============================================================================

/// Center toggle on a dark 3x3 board lights a plus shape.
#[test]
fn test_center_toggle_lights_plus() {
    let grid = Grid::filled(3, 3, false);
    let next = BoardEngine::toggle_around(&grid, Coord::new(1, 1));

    for (row, col) in [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)] {
        assert!(lit(&next, row, col), "({row},{col}) should be lit");
    }
    for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        assert!(!lit(&next, row, col), "corner ({row},{col}) should stay dark");
    }
}

/// Corner toggle skips the two off-board neighbors.
#[test]
fn test_corner_toggle_skips_outside() {
    let grid = Grid::filled(3, 3, false);
    let next = BoardEngine::toggle_around(&grid, Coord::new(0, 0));

    assert_eq!(next.lit_count(), 3);
    assert!(lit(&next, 0, 0));
    assert!(lit(&next, 0, 1));
    assert!(lit(&next, 1, 0));
    assert_eq!(next.dimensions(), (3, 3));
}

/// A single dark cell becomes lit and the board is solved.
#[test]
fn test_one_by_one_board() {
    let grid = Grid::filled(1, 1, false);
    let next = BoardEngine::toggle_around(&grid, Coord::new(0, 0));

    assert!(lit(&next, 0, 0));
    assert!(BoardEngine::is_solved(&next));
}

/// A fully lit board is solved before any move.
#[test]
fn test_all_lit_is_solved() {
    for (rows, cols) in [(1, 1), (3, 3), (2, 9), (6, 4)] {
        assert!(BoardEngine::is_solved(&Grid::filled(rows, cols, true)));
    }
}

/// The empty board is solved.
#[test]
fn test_zero_by_zero_is_solved() {
    assert!(BoardEngine::is_solved(&Grid::filled(0, 0, false)));
    assert!(BoardEngine::is_solved(&Grid::from_rows(vec![]).unwrap()));
}

/// Toggling lit cells turns them off again.
#[test]
fn test_toggle_dims_lit_cells() {
    let grid = Grid::filled(3, 3, true);
    let next = BoardEngine::toggle_around(&grid, Coord::new(2, 1));

    assert!(!lit(&next, 2, 1));
    assert!(!lit(&next, 1, 1));
    assert!(!lit(&next, 2, 0));
    assert!(!lit(&next, 2, 2));
    assert_eq!(next.lit_count(), 5);
    assert!(!BoardEngine::is_solved(&next));
}

/// A non-square board respects both bounds.
#[test]
fn test_rectangular_board_edges() {
    let grid = Grid::filled(2, 5, false);
    let next = BoardEngine::toggle_around(&grid, Coord::new(1, 4));

    assert_eq!(
        next.rows_vec(),
        vec![
            vec![false, false, false, false, true],
            vec![false, false, false, true, true],
        ]
    );
}

// =============================================================================
// Creation
// =============================================================================

/// Same seed, same board.
#[test]
fn test_create_deterministic_with_seed() {
    let a = BoardEngine::create(6, 6, 0.4, &mut BoardRng::new(123));
    let b = BoardEngine::create(6, 6, 0.4, &mut BoardRng::new(123));
    assert_eq!(a, b);
}

/// Different seeds give different boards.
#[test]
fn test_create_different_seeds_differ() {
    let a = BoardEngine::create(8, 8, 0.5, &mut BoardRng::new(1));
    let b = BoardEngine::create(8, 8, 0.5, &mut BoardRng::new(2));
    assert_ne!(a, b);
}

/// Lit fraction tracks the configured probability.
#[test]
fn test_create_lit_fraction() {
    let grid = BoardEngine::create(100, 100, 0.25, &mut BoardRng::new(42));
    let fraction = grid.lit_count() as f64 / grid.len() as f64;
    assert!((0.22..0.28).contains(&fraction), "lit fraction was {fraction}");
}

/// Creation consumes exactly one draw per cell.
#[test]
fn test_create_draws_once_per_cell() {
    struct Counting(usize);

    impl CellSource for Counting {
        fn next_unit(&mut self) -> f64 {
            self.0 += 1;
            0.5
        }
    }

    let mut source = Counting(0);
    let grid = BoardEngine::create(3, 7, 0.5, &mut source);
    assert_eq!(source.0, 21);
    assert!(BoardEngine::is_solved(&grid));
}

/// Reset from a config matches create with the same values.
#[test]
fn test_reset_matches_create() {
    let config = BoardConfig::new(4, 5, 0.3);
    let a = BoardEngine::reset(&config, &mut BoardRng::new(8));
    let b = BoardEngine::create(4, 5, 0.3, &mut BoardRng::new(8));
    assert_eq!(a, b);
}
