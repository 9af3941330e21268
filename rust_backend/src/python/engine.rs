//! Python bindings for engine reads on a session.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::str::FromStr;

use super::sessions::session_err;
use crate::parsing::Delimiter;
use crate::session::{global, SessionId};

/// Selectable values per level under a session's current state
///
/// Each level's options are conditioned on the coarser selections and the
/// effective date window.
///
/// Args:
///     session_id: Target session
///
/// Returns:
///     JSON string with main_domains, sub_domains and subject_areas arrays
#[pyfunction]
pub fn py_derive_options(session_id: u64) -> PyResult<String> {
    let options = global()
        .with_session(SessionId(session_id), |session| session.options())
        .map_err(session_err)?;

    serde_json::to_string(&options).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}

/// Filter and partition a session's dataset under its current state
///
/// Args:
///     session_id: Target session
///
/// Returns:
///     JSON string with groups, each holding a main_domain and its rows in
///     presentation order
#[pyfunction]
pub fn py_filter(session_id: u64) -> PyResult<String> {
    let result = global()
        .with_session(SessionId(session_id), |session| session.filtered())
        .map_err(session_err)?;

    serde_json::to_string(&result).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}

/// Export a session's filtered rows as delimited text
///
/// Args:
///     session_id: Target session
///     delimiter: "tab" or "comma"
///
/// Returns:
///     Delimited text with the canonical header line, dates in
///     `YYYY-MM-DD` form and missing dates as empty cells
#[pyfunction]
#[pyo3(signature = (session_id, delimiter="tab"))]
pub fn py_export(session_id: u64, delimiter: &str) -> PyResult<String> {
    let delimiter = Delimiter::from_str(delimiter).map_err(|e| PyValueError::new_err(e.to_string()))?;

    global()
        .with_session(SessionId(session_id), |session| session.export(delimiter))
        .map_err(session_err)
}

/// Advisory validation report for a session's dataset
///
/// Args:
///     session_id: Target session
///
/// Returns:
///     JSON string with is_valid, errors, warnings and stats
#[pyfunction]
pub fn py_validation(session_id: u64) -> PyResult<String> {
    let report = global()
        .with_session(SessionId(session_id), |session| session.validation())
        .map_err(session_err)?;

    serde_json::to_string(&report).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}

pub fn register_engine_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_derive_options, m)?)?;
    m.add_function(wrap_pyfunction!(py_filter, m)?)?;
    m.add_function(wrap_pyfunction!(py_export, m)?)?;
    m.add_function(wrap_pyfunction!(py_validation, m)?)?;
    Ok(())
}
