//! Core board types: coordinates, grids, RNG, configuration, errors.
//!
//! Everything here is plain data. The transition rules live in `rules`.

pub mod coord;
pub mod grid;
pub mod rng;
pub mod config;
pub mod error;

pub use coord::Coord;
pub use grid::Grid;
pub use rng::{BoardRng, BoardRngState, CellSource};
pub use config::{BoardConfig, DEFAULT_LIT_PROBABILITY, DEFAULT_SIZE};
pub use error::ConfigError;
