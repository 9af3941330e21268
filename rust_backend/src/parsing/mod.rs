//! Parsers for schedule table input formats.
//!
//! This module turns raw user input into a [`RawTable`]: rectangular rows of
//! named string fields, the one shape dataset construction accepts. Funneling
//! every source through the same type keeps column checks and date coercion
//! identical for pasted text, uploaded files and JSON payloads.
//!
//! # Parsers
//!
//! - [`delimited`]: Tab- or comma-separated text (pasted cells, file uploads)
//! - [`json_records`]: `[{column: value}, ...]` arrays from dataframe hosts
//! - [`datefmt`]: Coercive per-cell calendar date parsing
//!
//! # Example
//!
//! ```
//! use gantt_rust::parsing::parse_delimited;
//!
//! let table = parse_delimited("Task\tStart Date\nKickoff\t2025-01-01").unwrap();
//! assert_eq!(table.headers(), ["Task", "Start Date"]);
//! assert_eq!(table.len(), 1);
//! ```

pub mod datefmt;
pub mod delimited;
pub mod json_records;
pub mod table;

#[cfg(test)]
mod datefmt_tests;

pub use datefmt::parse_date;
pub use delimited::{parse_delimited, parse_delimited_with, sniff_delimiter, Delimiter};
pub use json_records::parse_json_records;
pub use table::{InputParseError, RawTable};
