//! # lights-out
//!
//! A Lights Out board engine: an n×m grid of lit/unlit cells where toggling
//! a cell also toggles its four orthogonal neighbors.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `BoardEngine` never owns or mutates a grid.
//!    `create` and `toggle_around` return new grids; callers swap them in.
//!
//! 2. **Injectable Randomness**: Initial lighting draws through the
//!    `CellSource` trait. `BoardRng` is seedable and serializable.
//!
//! 3. **Total Operations**: Out-of-range toggles are no-ops and empty
//!    boards are solved. Only construction from caller values can fail.
//!
//! ## Win Condition
//!
//! A board is solved when **every cell is lit**. This is the reverse of the
//! traditional all-dark objective and is kept deliberately.
//!
//! ## Modules
//!
//! - `core`: Coordinates, grids, RNG, configuration, errors
//! - `rules`: `BoardEngine` transitions and win check
//! - `session`: `Game` owner and the lock-serialized `SharedGame`
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ```
//! use lights_out::{BoardConfig, Coord, Game};
//!
//! let mut game = Game::new(BoardConfig::default(), 42).unwrap();
//! let before = game.grid().clone();
//! game.toggle(Coord::new(1, 1));
//! game.toggle(Coord::new(1, 1));
//! assert_eq!(game.grid(), &before);
//! ```

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardRng, BoardRngState, CellSource, ConfigError, Coord, Grid,
    DEFAULT_LIT_PROBABILITY, DEFAULT_SIZE,
};

pub use crate::rules::BoardEngine;

pub use crate::session::{BoardView, Game, GameSnapshot, SharedGame};
