//! The owner of a live board.
//!
//! `Game` holds the one mutable reference to the current grid. Every move
//! asks `BoardEngine` for a new grid and swaps it in.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, BoardRng, BoardRngState, ConfigError, Coord, Grid};
use crate::rules::BoardEngine;

/// What a presentation layer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardView<'a> {
    /// Render the playable grid.
    Playing(&'a Grid),
    /// Render the win message and a reset control.
    Solved,
}

/// A board in play.
#[derive(Clone, Debug)]
pub struct Game {
    config: BoardConfig,
    rng: BoardRng,
    grid: Grid,
}

impl Game {
    /// Start a game with a random board.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = BoardRng::new(seed);
        let grid = BoardEngine::reset(&config, &mut rng);
        debug!("new {}x{} board, seed {seed}, {} lit", config.rows, config.cols, grid.lit_count());

        Ok(Self { config, rng, grid })
    }

    /// Start a game from a known board.
    ///
    /// `seed` only affects later resets.
    pub fn with_grid(config: BoardConfig, grid: Grid, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.dimensions() != config.dimensions() {
            return Err(ConfigError::DimensionMismatch {
                expected: config.dimensions(),
                found: grid.dimensions(),
            });
        }

        Ok(Self { config, rng: BoardRng::new(seed), grid })
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// True iff every cell is lit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        BoardEngine::is_solved(&self.grid)
    }

    /// Toggle the cell at `coord` and its neighbors.
    ///
    /// Returns whether the board is now solved.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        self.grid = BoardEngine::toggle_around(&self.grid, coord);
        debug!("toggle at {coord}, {} lit", self.grid.lit_count());

        let solved = self.is_solved();
        if solved {
            info!("board solved after toggle at {coord}");
        }
        solved
    }

    /// Replace the board with a new random one.
    pub fn reset(&mut self) -> &Grid {
        self.grid = BoardEngine::reset(&self.config, &mut self.rng);
        debug!("reset, {} lit", self.grid.lit_count());
        &self.grid
    }

    /// What to render right now.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        if self.is_solved() {
            BoardView::Solved
        } else {
            BoardView::Playing(&self.grid)
        }
    }

    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            grid: self.grid.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a game from a snapshot.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, ConfigError> {
        let GameSnapshot { config, grid, rng } = snapshot;
        let mut game = Self::with_grid(config, grid, rng.seed)?;
        game.rng = BoardRng::from_state(&rng);
        Ok(game)
    }
}

/// Serializable game state: configuration, board, and RNG position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: BoardConfig,
    pub grid: Grid,
    pub rng: BoardRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        bincode::serialize(self).map_err(|e| ConfigError::Snapshot(e.to_string()))
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        bincode::deserialize(bytes).map_err(|e| ConfigError::Snapshot(e.to_string()))
    }
}
