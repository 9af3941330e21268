//! Validated schedule datasets and data-quality reporting.
//!
//! A [`ScheduleDataset`] is built once per user input and never mutated;
//! the filter engine treats it as the immutable source of truth until the
//! next upload replaces it.

pub mod schedule;
pub mod validator;

#[cfg(test)]
mod schedule_tests;

pub use schedule::{DatasetError, ScheduleDataset};
pub use validator::{ScheduleValidator, ValidationReport, ValidationStats};
