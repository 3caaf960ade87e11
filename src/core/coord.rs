//! Cell coordinates.
//!
//! Coordinates are signed so that callers can pass positions outside the
//! board. The engine treats those as no-ops rather than errors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A `(row, col)` position. May lie outside any particular grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`. Returns `None` on overflow.
    #[must_use]
    pub fn offset(self, d_row: i64, d_col: i64) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }

    /// The cell itself followed by its orthogonal neighbors.
    ///
    /// Neighbors whose coordinates would overflow `i64` are omitted; they
    /// could never be inside a grid anyway.
    #[must_use]
    pub fn plus_shape(self) -> SmallVec<[Coord; 5]> {
        const OFFSETS: [(i64, i64); 5] = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)];

        OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| self.offset(dr, dc))
            .collect()
    }

    /// Convert to unsigned indices if this coordinate lies in `rows × cols`.
    #[must_use]
    pub fn to_index(self, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < rows && col < cols).then_some((row, col))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}
