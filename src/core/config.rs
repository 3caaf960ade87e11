//! Board configuration.
//!
//! The caller supplies dimensions and the chance that any cell starts lit.
//! Missing fields fall back to the classic 3x3 board with a 25% lit chance.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default rows and columns.
pub const DEFAULT_SIZE: usize = 3;

/// Default chance that a cell starts lit.
pub const DEFAULT_LIT_PROBABILITY: f64 = 0.25;

/// Dimensions and lighting chance for a board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Probability in `[0, 1]` that each cell starts lit.
    pub lit_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            lit_probability: DEFAULT_LIT_PROBABILITY,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with explicit values.
    #[must_use]
    pub fn new(rows: usize, cols: usize, lit_probability: f64) -> Self {
        Self { rows, cols, lit_probability }
    }

    /// Set the row count.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the column count.
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Set the chance that a cell starts lit.
    #[must_use]
    pub fn with_lit_probability(mut self, lit_probability: f64) -> Self {
        self.lit_probability = lit_probability;
        self
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check the configuration.
    ///
    /// Zero rows or columns are accepted; they describe an empty board,
    /// which is always solved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.lit_probability) {
            return Err(ConfigError::InvalidProbability(self.lit_probability));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::TooLarge { rows: self.rows, cols: self.cols });
        }
        Ok(())
    }
}
