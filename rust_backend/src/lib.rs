//! # Gantt Rust Backend
//!
//! High-performance filtering engine for hierarchical project schedules.
//!
//! This crate parses Gantt-style schedule tables from delimited text or
//! JSON record arrays, builds typed datasets with content-derived
//! fingerprints, and filters them through cascading domain selections and
//! date windows. Results come back partitioned by main domain, ready for
//! timeline rendering or delimited export.
//!
//! ## Features
//!
//! - **Data Loading**: Parse schedules from CSV, TSV or JSON record arrays
//! - **Date Coercion**: Recover dates from mixed layouts, cell by cell
//! - **Filtering**: Pure cascade of domain selections, date window and
//!   null-date policy
//! - **Validation**: Advisory data-quality reports alongside loading
//! - **Sessions**: Stateful wrapper with fingerprint deduplication for
//!   interactive hosts
//! - **Python Bindings**: Optional PyO3 surface behind the `python`
//!   feature
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`core`]: Domain types (rows, levels, date windows)
//! - [`parsing`]: Raw table funnel for delimited text and JSON records
//! - [`dataset`]: Typed dataset construction and validation
//! - [`engine`]: Pure filtering, option derivation and partitioning
//! - [`export`]: Delimited output of filtered results
//! - [`io`]: File loaders with format detection
//! - [`session`]: Session state, store and TOML configuration

pub mod core;
pub mod dataset;
pub mod engine;
pub mod export;
pub mod io;
pub mod parsing;
pub mod session;

#[cfg(feature = "python")]
pub mod python;
