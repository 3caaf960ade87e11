//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{BoardConfig, ConfigError, Coord};
use crate::session::Game;

fn value_error(e: ConfigError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
}

/// Python wrapper for a Lights Out game.
#[pyclass(name = "LightsOut")]
pub struct PyLightsOut {
    game: Game,
}

#[pymethods]
impl PyLightsOut {
    /// Create a new game.
    ///
    /// # Arguments
    /// - rows: Number of rows
    /// - cols: Number of columns
    /// - lit_probability: Chance each cell starts lit, in [0, 1]
    /// - seed: RNG seed for deterministic boards
    #[new]
    #[pyo3(signature = (rows = 3, cols = 3, lit_probability = 0.25, seed = 42))]
    fn new(rows: usize, cols: usize, lit_probability: f64, seed: u64) -> PyResult<Self> {
        let config = BoardConfig::new(rows, cols, lit_probability);
        let game = Game::new(config, seed).map_err(value_error)?;
        Ok(Self { game })
    }

    /// Toggle a cell and its neighbors. Returns True if the board is solved.
    fn toggle(&mut self, row: i64, col: i64) -> bool {
        self.game.toggle(Coord::new(row, col))
    }

    /// Start over with a new random board.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Check if every cell is lit.
    fn is_solved(&self) -> bool {
        self.game.is_solved()
    }

    /// Get the board as a list of rows.
    fn grid(&self) -> Vec<Vec<bool>> {
        self.game.grid().rows_vec()
    }

    /// Get the board as a [rows, cols] uint8 numpy array.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let grid = self.game.grid();
        let cells: Vec<u8> = grid.iter().map(u8::from).collect();

        PyArray1::from_vec_bound(py, cells)
            .reshape([grid.rows(), grid.cols()])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn rows(&self) -> usize {
        self.game.config().rows
    }

    #[getter]
    fn cols(&self) -> usize {
        self.game.config().cols
    }

    fn __str__(&self) -> String {
        self.game.grid().to_string()
    }

    fn __repr__(&self) -> String {
        let status = if self.game.is_solved() { "solved" } else { "playing" };
        format!(
            "LightsOut(rows={}, cols={}, lit={}, status={})",
            self.game.config().rows,
            self.game.config().cols,
            self.game.grid().lit_count(),
            status
        )
    }
}
