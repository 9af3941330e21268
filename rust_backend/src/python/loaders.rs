use pyo3::prelude::*;

use crate::parsing::{parse_date, sniff_delimiter};

/// Parse a date cell the way dataset loading does
///
/// Accepts the same layouts as dataset construction, including values with
/// a trailing time of day.
///
/// Args:
///     text: The cell text to parse
///
/// Returns:
///     The date in `YYYY-MM-DD` form, or None when the cell is blank or
///     unparseable.
///
/// Example:
///     >>> import gantt_rust
///     >>> gantt_rust.py_parse_date("2025/01/06")
///     '2025-01-06'
#[pyfunction]
pub fn py_parse_date(text: &str) -> Option<String> {
    parse_date(text).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Sniff the field separator of delimited text
///
/// Args:
///     text: Delimited text, typically the full file content
///
/// Returns:
///     "tab" or "comma"
#[pyfunction]
pub fn py_sniff_delimiter(text: &str) -> String {
    sniff_delimiter(text).to_string()
}

pub fn register_loader_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_parse_date, m)?)?;
    m.add_function(wrap_pyfunction!(py_sniff_delimiter, m)?)?;
    Ok(())
}
