//! Serialized access to one game from many callers.
//!
//! Each operation runs read, compute, and publish under a single lock, so
//! concurrent toggles never interleave. Grid snapshots handed out are cheap
//! clones of the persistent vector.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{Coord, Grid};

use super::game::Game;

/// A cloneable handle to a shared `Game`.
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Wrap a game for shared use.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self { inner: Arc::new(Mutex::new(game)) }
    }

    // The grid is swapped wholesale, so a panicking holder cannot leave it
    // half-updated and the poison flag can be ignored.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Toggle around `coord`. Returns whether the board is now solved.
    pub fn toggle(&self, coord: Coord) -> bool {
        self.lock().toggle(coord)
    }

    /// Replace the board with a new random one and return it.
    pub fn reset(&self) -> Grid {
        self.lock().reset().clone()
    }

    /// Snapshot of the current board.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.lock().grid().clone()
    }

    /// True iff every cell is lit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.lock().is_solved()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.lock())
    }
}
