//! Schedule validation with detailed error and warning reporting.
//!
//! Validation is advisory by design: short of structural failures (missing
//! columns, no parseable dates at all) a messy upload still loads, and the
//! report tells the host what to surface next to the chart.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::domain::REQUIRED_COLUMNS;
use crate::dataset::schedule::ScheduleDataset;
use crate::parsing::datefmt::parse_date;
use crate::parsing::table::RawTable;

/// Years a mainstream dataframe host can represent as nanosecond
/// timestamps. Dates outside this range load fine here but will break the
/// chart downstream, so they are flagged.
const HOST_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2262;

/// How many individual offenders a warning lists before collapsing into a
/// summary count.
const DETAIL_CAP: usize = 5;

/// Validation outcome with categorized issues and summary statistics.
///
/// Errors make `is_valid` false and mean dataset construction would fail.
/// Warnings flag quality issues in data that still loads.
///
/// # Examples
///
/// ```
/// use gantt_rust::dataset::ValidationReport;
///
/// let mut report = ValidationReport::new();
/// assert!(report.is_valid);
///
/// report.add_error("Missing required columns: Task".to_string());
/// assert!(!report.is_valid);
/// assert_eq!(report.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_rows: usize,
    pub distinct_main_domains: usize,
    pub rows_with_null_dates: usize,
    pub misordered_rows: usize,
    pub blank_domain_values: usize,
    pub duplicate_tasks: usize,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical issue and marks the report invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a quality issue that does not block loading.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for raw schedule tables and constructed datasets.
///
/// [`ScheduleValidator::validate_table`] is the pre-construction check a
/// host runs to show a readable message before attempting to load.
/// [`ScheduleValidator::validate_dataset`] reports quality issues in data
/// that already loaded.
pub struct ScheduleValidator;

impl ScheduleValidator {
    /// Checks a raw table for problems that would fail dataset construction
    /// and for date cells that will coerce to unknown.
    pub fn validate_table(table: &RawTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.stats.total_rows = table.len();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .copied()
            .collect();
        if !missing.is_empty() {
            report.add_error(format!(
                "Missing required columns: {} (required: {})",
                missing.join(", "),
                REQUIRED_COLUMNS.join(", ")
            ));
            return report;
        }

        for column in ["Start Date", "End Date"] {
            Self::check_date_column(table, column, &mut report);
        }

        report
    }

    /// Reports quality issues on a dataset that already loaded.
    ///
    /// Nothing here invalidates the report; every finding is a warning
    /// backed by a statistic.
    pub fn validate_dataset(dataset: &ScheduleDataset) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.stats.total_rows = dataset.len();
        report.stats.rows_with_null_dates = dataset.rows_with_null_dates();

        let mut mains = HashSet::new();
        let mut seen_tasks = HashSet::new();
        let mut out_of_range_dates = 0usize;

        for row in dataset.rows() {
            if !row.main_domain.is_empty() {
                mains.insert(row.main_domain.as_str());
            }

            if row.is_misordered() {
                report.stats.misordered_rows += 1;
                if report.stats.misordered_rows <= DETAIL_CAP {
                    report.add_warning(format!(
                        "Task `{}` ends before it starts ({} < {})",
                        row.task,
                        canonical(row.end_date),
                        canonical(row.start_date),
                    ));
                }
            }

            for value in [&row.main_domain, &row.sub_domain, &row.subject_area] {
                if value.is_empty() {
                    report.stats.blank_domain_values += 1;
                }
            }

            if !seen_tasks.insert((row.main_domain.as_str(), row.task.as_str())) {
                report.stats.duplicate_tasks += 1;
                if report.stats.duplicate_tasks <= DETAIL_CAP {
                    report.add_warning(format!(
                        "Duplicate task `{}` in main domain `{}`",
                        row.task, row.main_domain
                    ));
                }
            }

            for date in [row.start_date, row.end_date].into_iter().flatten() {
                use chrono::Datelike;
                if !HOST_YEAR_RANGE.contains(&date.year()) {
                    out_of_range_dates += 1;
                }
            }
        }

        report.stats.distinct_main_domains = mains.len();

        if report.stats.misordered_rows > DETAIL_CAP {
            report.add_warning(format!(
                "Total misordered rows: {} (showing first {})",
                report.stats.misordered_rows, DETAIL_CAP
            ));
        }
        if report.stats.duplicate_tasks > DETAIL_CAP {
            report.add_warning(format!(
                "Total duplicate tasks: {} (showing first {})",
                report.stats.duplicate_tasks, DETAIL_CAP
            ));
        }
        if report.stats.rows_with_null_dates > 0 {
            report.add_warning(format!(
                "{} of {} rows are missing a start or end date and will be \
                 excluded from date filtering by default",
                report.stats.rows_with_null_dates,
                report.stats.total_rows
            ));
        }
        if report.stats.blank_domain_values > 0 {
            report.add_warning(format!(
                "{} blank domain values found; blank values never appear in \
                 filter options",
                report.stats.blank_domain_values
            ));
        }
        if out_of_range_dates > 0 {
            report.add_warning(format!(
                "{} dates fall outside {}..={} and may not render in the host chart",
                out_of_range_dates,
                HOST_YEAR_RANGE.start(),
                HOST_YEAR_RANGE.end()
            ));
        }

        report
    }

    fn check_date_column(table: &RawTable, column: &str, report: &mut ValidationReport) {
        let Some(idx) = table.column_index(column) else {
            return;
        };

        let mut unparseable = Vec::new();
        let mut parseable = 0usize;
        for row in table.rows() {
            let cell = row[idx].as_str();
            if cell.is_empty() {
                continue;
            }
            if parse_date(cell).is_some() {
                parseable += 1;
            } else {
                unparseable.push(cell);
            }
        }

        if !table.is_empty() && parseable == 0 {
            report.add_error(format!(
                "No value in column `{}` could be read as a date",
                column
            ));
            return;
        }

        if !unparseable.is_empty() {
            let shown: Vec<&str> = unparseable.iter().take(DETAIL_CAP).copied().collect();
            let suffix = if unparseable.len() > DETAIL_CAP {
                format!(" (showing first {})", DETAIL_CAP)
            } else {
                String::new()
            };
            report.add_warning(format!(
                "{} unreadable date cells in `{}`{}: {}",
                unparseable.len(),
                column,
                suffix,
                shown.join(", ")
            ));
        }
    }
}

fn canonical(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "?".to_string())
}
