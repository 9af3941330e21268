//! Serialization of filtered results back to delimited text.

pub mod delimited;

pub use delimited::{write_delimited, ExportError};
