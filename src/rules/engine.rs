//! Board transition rules.
//!
//! `BoardEngine` holds no state. Each operation takes a grid (or the inputs
//! to build one) and returns a fresh value:
//! - `create` / `reset`: random initial board
//! - `toggle_around`: flip a cell and its orthogonal neighbors
//! - `is_solved`: every cell lit

use smallvec::SmallVec;

use crate::core::{BoardConfig, CellSource, Coord, Grid};

/// Pure transition functions over `Grid`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardEngine;

impl BoardEngine {
    /// Create a `rows × cols` board, lighting each cell independently.
    ///
    /// Draws one value `r` per cell in row-major order; the cell is lit iff
    /// `r <= lit_probability`. Zero rows or columns give an empty board.
    pub fn create<S>(rows: usize, cols: usize, lit_probability: f64, source: &mut S) -> Grid
    where
        S: CellSource + ?Sized,
    {
        Grid::from_fn(rows, cols, |_, _| source.next_unit() <= lit_probability)
    }

    /// Create a fresh board from a configuration.
    pub fn reset<S>(config: &BoardConfig, source: &mut S) -> Grid
    where
        S: CellSource + ?Sized,
    {
        Self::create(config.rows, config.cols, config.lit_probability, source)
    }

    /// The in-bounds cells a toggle at `coord` would flip.
    ///
    /// At most five: the cell itself and its orthogonal neighbors.
    #[must_use]
    pub fn footprint(grid: &Grid, coord: Coord) -> SmallVec<[Coord; 5]> {
        let mut cells = coord.plus_shape();
        cells.retain(|c| grid.contains(*c));
        cells
    }

    /// Flip the cell at `coord` and its orthogonal neighbors.
    ///
    /// Positions outside the grid are skipped. The input is left untouched.
    #[must_use]
    pub fn toggle_around(grid: &Grid, coord: Coord) -> Grid {
        let mut next = grid.clone();
        for cell in Self::footprint(grid, coord) {
            next.flip(cell);
        }
        next
    }

    /// True iff every cell is lit. An empty grid is solved.
    #[must_use]
    pub fn is_solved(grid: &Grid) -> bool {
        grid.iter().all(|lit| lit)
    }
}
