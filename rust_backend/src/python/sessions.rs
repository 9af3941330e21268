//! Python bindings for session lifecycle and state changes.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::domain::DateWindow;
use crate::engine::FilterSelection;
use crate::parsing::parse_date;
use crate::session::{global, SessionError, SessionId};

/// Map a session error onto the matching Python exception type.
///
/// Bad data supplied by the caller raises `ValueError`; everything else
/// (missing sessions, missing datasets, export trouble) raises
/// `RuntimeError`.
pub(crate) fn session_err(err: SessionError) -> PyErr {
    match &err {
        SessionError::Input(_) | SessionError::Dataset(_) => PyValueError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Create a session in the process-wide store
///
/// Returns:
///     The new session id
#[pyfunction]
pub fn py_create_session() -> u64 {
    global().create().0
}

/// Remove a session from the process-wide store
///
/// Args:
///     session_id: Session to remove
///
/// Returns:
///     True when the session existed
#[pyfunction]
pub fn py_remove_session(session_id: u64) -> bool {
    global().remove(SessionId(session_id))
}

/// Load delimited text into a session
///
/// The delimiter is sniffed from the content. Reloading data with the same
/// fingerprint keeps the current selection.
///
/// Args:
///     session_id: Target session
///     text: Delimited text including the header line
///
/// Returns:
///     JSON string with fingerprint, total_rows, rows_with_null_dates and
///     replaced
#[pyfunction]
pub fn py_load_delimited(session_id: u64, text: &str) -> PyResult<String> {
    let outcome = global()
        .update_session(SessionId(session_id), |session| {
            session.load_delimited(text)
        })
        .map_err(session_err)?;

    serde_json::to_string(&outcome).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}

/// Load a JSON record array into a session
///
/// Args:
///     session_id: Target session
///     text: JSON array of flat record objects
///
/// Returns:
///     JSON string with fingerprint, total_rows, rows_with_null_dates and
///     replaced
#[pyfunction]
pub fn py_load_json_records(session_id: u64, text: &str) -> PyResult<String> {
    let outcome = global()
        .update_session(SessionId(session_id), |session| {
            session.load_json_records(text)
        })
        .map_err(session_err)?;

    serde_json::to_string(&outcome).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}

/// Replace a session's selection
///
/// Missing keys in the JSON fall back to unrestricted; selected values the
/// cascade does not offer are pruned.
///
/// Args:
///     session_id: Target session
///     selection_json: JSON object with optional main_domains, sub_domains,
///         subject_areas and date_window keys
#[pyfunction]
pub fn py_set_selection(session_id: u64, selection_json: &str) -> PyResult<()> {
    let selection: FilterSelection = serde_json::from_str(selection_json)
        .map_err(|e| PyValueError::new_err(format!("Failed to parse selection JSON: {}", e)))?;

    global()
        .update_session(SessionId(session_id), |session| {
            session.set_selection(selection);
            Ok(())
        })
        .map_err(session_err)
}

/// Set or clear a session's date window
///
/// Args:
///     session_id: Target session
///     start: Window start date, in any accepted layout
///     end: Window end date, in any accepted layout
///
/// Passing neither date clears the window, falling back to the dataset
/// span. Passing only one is an error.
#[pyfunction]
#[pyo3(signature = (session_id, start=None, end=None))]
pub fn py_set_date_window(
    session_id: u64,
    start: Option<&str>,
    end: Option<&str>,
) -> PyResult<()> {
    let window = match (start, end) {
        (None, None) => None,
        (Some(s), Some(e)) => {
            let start_date = parse_date(s)
                .ok_or_else(|| PyValueError::new_err(format!("Unparseable start date: {}", s)))?;
            let end_date = parse_date(e)
                .ok_or_else(|| PyValueError::new_err(format!("Unparseable end date: {}", e)))?;
            Some(DateWindow::new(start_date, end_date))
        }
        _ => {
            return Err(PyValueError::new_err(
                "Provide both start and end, or neither",
            ))
        }
    };

    global()
        .update_session(SessionId(session_id), |session| {
            session.set_date_window(window);
            Ok(())
        })
        .map_err(session_err)
}

/// Reset a session's selection to unrestricted
///
/// Args:
///     session_id: Target session
#[pyfunction]
pub fn py_clear_selection(session_id: u64) -> PyResult<()> {
    global()
        .update_session(SessionId(session_id), |session| {
            session.clear_selection();
            Ok(())
        })
        .map_err(session_err)
}

pub fn register_session_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_create_session, m)?)?;
    m.add_function(wrap_pyfunction!(py_remove_session, m)?)?;
    m.add_function(wrap_pyfunction!(py_load_delimited, m)?)?;
    m.add_function(wrap_pyfunction!(py_load_json_records, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_selection, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_date_window, m)?)?;
    m.add_function(wrap_pyfunction!(py_clear_selection, m)?)?;
    Ok(())
}
