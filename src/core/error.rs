//! Construction errors.
//!
//! Board operations themselves are total. These errors only come from
//! building a board or game from caller-supplied values.

use thiserror::Error;

/// Rejected board configuration or board data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Lit probability is NaN or outside `[0, 1]`.
    #[error("lit probability {0} is not in [0, 1]")]
    InvalidProbability(f64),

    /// `rows * cols` does not fit in memory-addressable cell count.
    #[error("a {rows}x{cols} board has too many cells")]
    TooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Literal rows passed to a grid constructor had unequal lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A supplied grid does not match the configured dimensions.
    #[error("grid is {}x{}, expected {}x{}", .found.0, .found.1, .expected.0, .expected.1)]
    DimensionMismatch {
        /// Configured `(rows, cols)`.
        expected: (usize, usize),
        /// Supplied `(rows, cols)`.
        found: (usize, usize),
    },

    /// Serialized grid data has the wrong number of cells.
    #[error("grid data has {found} cells, expected {expected}")]
    CellCount {
        /// `rows * cols`.
        expected: usize,
        /// Cells present.
        found: usize,
    },

    /// A game snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::InvalidProbability(1.5).to_string(),
            "lit probability 1.5 is not in [0, 1]"
        );
        assert_eq!(
            ConfigError::DimensionMismatch { expected: (3, 3), found: (2, 4) }.to_string(),
            "grid is 2x4, expected 3x3"
        );
        assert_eq!(
            ConfigError::RaggedRows { row: 1, expected: 3, found: 2 }.to_string(),
            "row 1 has 2 cells, expected 3"
        );
    }
}
