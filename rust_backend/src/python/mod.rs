//! Python bindings for the Gantt filter engine.
//!
//! This module exposes Rust functions to Python via PyO3, carrying the
//! engine's structured values across the boundary as JSON strings.
//!
//! # Modules
//!
//! - [`loaders`]: Stateless parsing helpers
//! - [`sessions`]: Session lifecycle, data loading and selection changes
//! - [`engine`]: Options, filtering, export and validation on a session
//!
//! # Python API
//!
//! All functions are available in the `gantt_rust` Python module after
//! installation. Session functions operate on ids handed out by
//! `py_create_session`; see individual function documentation for usage.

use pyo3::prelude::*;

pub mod engine;
pub mod loaders;
pub mod sessions;

pub use engine::*;
pub use loaders::*;
pub use sessions::*;

/// Gantt Rust backend - hierarchical schedule filtering
#[pymodule]
fn gantt_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    loaders::register_loader_functions(m)?;
    sessions::register_session_functions(m)?;
    engine::register_engine_functions(m)?;
    Ok(())
}
