//! Python bindings for the Lights Out engine.
//!
//! # Quick Start
//!
//! ```python
//! import lights_out
//!
//! game = lights_out.LightsOut(rows=5, cols=5, lit_probability=0.3, seed=7)
//! solved = game.toggle(2, 2)
//! board = game.to_numpy()   # shape (5, 5), uint8
//! ```

use pyo3::prelude::*;

mod py_games;

pub use py_games::*;

/// lights_out: a Lights Out board for Python front ends.
#[pymodule]
fn lights_out(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLightsOut>()?;
    Ok(())
}
