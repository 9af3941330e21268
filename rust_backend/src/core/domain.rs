//! Domain models for project schedule rows and date windows.
//!
//! This module provides the core data structures that represent Gantt schedule
//! entries: a three-level domain hierarchy (main domain, sub domain, subject
//! area), the task name, and the start/end dates a timeline bar is drawn from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column headers a schedule table must provide, in canonical order.
///
/// Header matching is exact and case-sensitive. Inputs may carry additional
/// columns; those are ignored. Exports emit columns in exactly this order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Main Domain",
    "Sub Domain",
    "Subject Area",
    "Task",
    "Start Date",
    "End Date",
];

/// One level of the domain classification hierarchy, coarsest first.
///
/// # Examples
///
/// ```
/// use gantt_rust::core::domain::DomainLevel;
///
/// assert_eq!(DomainLevel::MainDomain.column_name(), "Main Domain");
/// assert_eq!(DomainLevel::SubjectArea.column_name(), "Subject Area");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainLevel {
    MainDomain,
    SubDomain,
    SubjectArea,
}

impl DomainLevel {
    /// Returns the table column header holding this level's values.
    pub fn column_name(&self) -> &'static str {
        match self {
            DomainLevel::MainDomain => "Main Domain",
            DomainLevel::SubDomain => "Sub Domain",
            DomainLevel::SubjectArea => "Subject Area",
        }
    }

    /// All levels, coarsest first.
    pub fn all() -> [DomainLevel; 3] {
        [
            DomainLevel::MainDomain,
            DomainLevel::SubDomain,
            DomainLevel::SubjectArea,
        ]
    }
}

/// Represents a single schedule entry: one task bar on the Gantt chart.
///
/// Dates are optional because source tables routinely contain blank or
/// unparseable date cells; `None` is the explicit "date unknown" marker
/// produced by coercive parsing rather than a load failure.
///
/// `end_date < start_date` is representable on purpose. Such rows occur in
/// real uploads, render as empty bars in the host chart, and are reported by
/// the validator instead of being rejected.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gantt_rust::core::domain::ScheduleRow;
///
/// let row = ScheduleRow {
///     main_domain: "Engineering".to_string(),
///     sub_domain: "Platform".to_string(),
///     subject_area: "Storage".to_string(),
///     task: "Migrate volumes".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 10),
/// };
///
/// assert!(row.has_complete_dates());
/// assert_eq!(row.duration_days(), Some(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub main_domain: String,
    pub sub_domain: String,
    pub subject_area: String,
    pub task: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ScheduleRow {
    /// Returns `true` when both dates parsed successfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use gantt_rust::core::domain::ScheduleRow;
    ///
    /// let mut row = ScheduleRow {
    ///     main_domain: "A".to_string(),
    ///     sub_domain: "X".to_string(),
    ///     subject_area: "P".to_string(),
    ///     task: "T1".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
    ///     end_date: None,
    /// };
    /// assert!(!row.has_complete_dates());
    ///
    /// row.end_date = NaiveDate::from_ymd_opt(2025, 1, 2);
    /// assert!(row.has_complete_dates());
    /// ```
    pub fn has_complete_dates(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// Returns `true` when both dates are known and the end precedes the start.
    ///
    /// Rows with only one known date are not considered misordered.
    pub fn is_misordered(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => end < start,
            _ => false,
        }
    }

    /// Returns the signed span in days between start and end, when both are known.
    ///
    /// Misordered rows yield a negative value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use gantt_rust::core::domain::ScheduleRow;
    ///
    /// let row = ScheduleRow {
    ///     main_domain: "A".to_string(),
    ///     sub_domain: "X".to_string(),
    ///     subject_area: "P".to_string(),
    ///     task: "T1".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2025, 1, 10),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 1, 4),
    /// };
    ///
    /// assert!(row.is_misordered());
    /// assert_eq!(row.duration_days(), Some(-6));
    /// ```
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Returns the classification value for one hierarchy level.
    pub fn level_value(&self, level: DomainLevel) -> &str {
        match level {
            DomainLevel::MainDomain => &self.main_domain,
            DomainLevel::SubDomain => &self.sub_domain,
            DomainLevel::SubjectArea => &self.subject_area,
        }
    }
}

/// An inclusive calendar date range used for window filtering.
///
/// Both endpoints belong to the window. Construction performs no ordering
/// check: a window with `end < start` is a valid value that simply matches
/// no dates, which is what a host gets when a user drags range handles past
/// each other.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gantt_rust::core::domain::DateWindow;
///
/// let window = DateWindow::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
/// );
///
/// assert!(window.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
/// assert!(!window.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a new inclusive date window.
    ///
    /// # Arguments
    ///
    /// * `start` - First date inside the window
    /// * `end` - Last date inside the window
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `date` lies inside the window, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns `true` if the `[start, end]` span lies entirely inside the window.
    ///
    /// This is the containment test the filter applies by default: a task
    /// reaching past either edge of the window is rejected even when most of
    /// it falls inside.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use gantt_rust::core::domain::DateWindow;
    ///
    /// let window = DateWindow::new(
    ///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
    /// );
    ///
    /// let jan = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
    /// assert!(window.surrounds(jan(2), jan(8)));
    /// assert!(!window.surrounds(jan(5), jan(20)));
    /// ```
    pub fn surrounds(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= start && end <= self.end
    }

    /// Returns `true` if the `[start, end]` span shares at least one day
    /// with the window.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && end >= self.start
    }
}
