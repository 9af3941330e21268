//! High-level data loading utilities.
//!
//! This module provides convenient loaders that combine parsing logic with
//! dataset construction. The loaders handle format detection, error context,
//! and produce ready-to-filter datasets.
//!
//! # Example
//!
//! ```no_run
//! use gantt_rust::io::loaders::ScheduleLoader;
//! use std::path::Path;
//!
//! let result = ScheduleLoader::load_from_file(Path::new("schedule.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} rows", result.num_rows);
//! ```

pub mod loaders;


pub use loaders::{ScheduleLoadResult, ScheduleLoader, ScheduleSourceType};
