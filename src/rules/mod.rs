//! Board rules.
//!
//! `BoardEngine` defines the transitions. It never owns a grid; callers keep
//! the current grid and swap in whatever the engine returns.

pub mod engine;

pub use engine::BoardEngine;
