//! Live game ownership.
//!
//! - `Game`: single owner of the current grid
//! - `SharedGame`: lock-serialized handle for concurrent callers

mod game;
mod shared;

pub use game::{BoardView, Game, GameSnapshot};
pub use shared::SharedGame;
