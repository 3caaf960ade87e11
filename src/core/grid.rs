//! The board grid.
//!
//! A `Grid` is a value: nothing outside this crate can mutate one in place.
//! Transitions produce a new grid, and because cells live in an `im`
//! persistent vector the new grid shares structure with the old one.
//!
//! ## Layout
//!
//! Cells are stored row-major with `cols` as the stride:
//!
//! ```text
//!     .  .  .
//!     O  O  .      (. is off, O is on)
//!     .  .  .
//! ```
//!
//! is `[f, f, f, t, t, f, f, f, f]` with `rows = 3`, `cols = 3`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::ConfigError;

/// A `rows × cols` matrix of lit/unlit cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<bool>,
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vector<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = raw
            .rows
            .checked_mul(raw.cols)
            .ok_or(ConfigError::TooLarge { rows: raw.rows, cols: raw.cols })?;
        if raw.cells.len() != expected {
            return Err(ConfigError::CellCount { expected, found: raw.cells.len() });
        }
        Ok(Self { rows: raw.rows, cols: raw.cols, cells: raw.cells })
    }
}

impl Grid {
    /// Build a grid by evaluating `f(row, col)` in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vector::new();
        for row in 0..rows {
            for col in 0..cols {
                cells.push_back(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// A grid with every cell set to `lit`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, lit: bool) -> Self {
        Self::from_fn(rows, cols, |_, _| lit)
    }

    /// Build a grid from literal rows.
    ///
    /// Every row must have the same length as row 0.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(ConfigError::RaggedRows { row, expected: cols, found: r.len() });
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid has no cells (zero rows or zero columns).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at `coord` is lit. `None` if out of range.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        let (row, col) = coord.to_index(self.rows, self.cols)?;
        self.cells.get(row * self.cols + col).copied()
    }

    /// True if `coord` lies inside the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.to_index(self.rows, self.cols).is_some()
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.iter().filter(|&lit| lit).count()
    }

    /// Export as an array of rows.
    #[must_use]
    pub fn rows_vec(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.cells[row * self.cols + col]).collect())
            .collect()
    }

    /// Invert one cell. Out-of-range coordinates are ignored.
    ///
    /// Only the engine calls this, and only on a grid it has just cloned.
    pub(crate) fn flip(&mut self, coord: Coord) {
        if let Some((row, col)) = coord.to_index(self.rows, self.cols) {
            let index = row * self.cols + col;
            let lit = self.cells[index];
            self.cells.set(index, !lit);
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                let lit = self.cells[row * self.cols + col];
                write!(f, "{}", if lit { 'O' } else { '.' })?;
            }
        }
        Ok(())
    }
}
