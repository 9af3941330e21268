use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::domain::{DateWindow, ScheduleRow, REQUIRED_COLUMNS};
use crate::parsing::datefmt::parse_date;
use crate::parsing::table::RawTable;

/// Errors that prevent a [`ScheduleDataset`] from being built.
///
/// Construction is all-or-nothing: a table either becomes a complete dataset
/// or fails with one of these, never a partially loaded one.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// One or more required columns are absent from the table header.
    #[error(
        "missing required columns: {} (required: {})",
        missing.join(", "),
        REQUIRED_COLUMNS.join(", ")
    )]
    MissingColumns { missing: Vec<String> },

    /// A date column exists but not a single value in it parses as a date,
    /// which almost always means the wrong table was uploaded.
    #[error("no value in column `{column}` could be read as a date")]
    NoParsableDates { column: String },
}

/// An ordered, immutable collection of schedule rows built from one input.
///
/// Construction validates the column set, coerces date cells (bad cells
/// become `None` rather than failing the load) and computes a content
/// fingerprint used to recognize repeated uploads of the same data. After
/// construction the dataset never changes; a new input replaces it
/// wholesale.
///
/// # Examples
///
/// ```
/// use gantt_rust::dataset::ScheduleDataset;
/// use gantt_rust::parsing::parse_delimited;
///
/// let table = parse_delimited(
///     "Main Domain,Sub Domain,Subject Area,Task,Start Date,End Date\n\
///      Engineering,Platform,Storage,Migrate volumes,2025-01-01,2025-01-10\n\
///      Engineering,Platform,Network,Renumber VLANs,not-a-date,2025-02-01\n",
/// )
/// .unwrap();
///
/// let dataset = ScheduleDataset::from_table(&table).unwrap();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.rows_with_null_dates(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDataset {
    rows: Vec<ScheduleRow>,
    rows_with_null_dates: usize,
    fingerprint: String,
}

impl ScheduleDataset {
    /// Builds a dataset from a parsed table.
    ///
    /// Fails with [`DatasetError::MissingColumns`] when any required column
    /// is absent (the message names every missing column and the full
    /// required set), and with [`DatasetError::NoParsableDates`] when a date
    /// column contains data but not one parseable value. Individual bad date
    /// cells are tolerated and coerced to `None`. Columns beyond the
    /// required six are ignored.
    pub fn from_table(table: &RawTable) -> Result<ScheduleDataset, DatasetError> {
        let mut missing = Vec::new();
        let mut indices = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            match table.column_index(name) {
                Some(found) => *slot = found,
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns { missing });
        }
        let [main_idx, sub_idx, area_idx, task_idx, start_idx, end_idx] = indices;

        let mut rows = Vec::with_capacity(table.len());
        let mut parsed_starts = 0usize;
        let mut parsed_ends = 0usize;
        for raw in table.rows() {
            let start_date = parse_date(&raw[start_idx]);
            let end_date = parse_date(&raw[end_idx]);
            parsed_starts += usize::from(start_date.is_some());
            parsed_ends += usize::from(end_date.is_some());

            rows.push(ScheduleRow {
                main_domain: raw[main_idx].clone(),
                sub_domain: raw[sub_idx].clone(),
                subject_area: raw[area_idx].clone(),
                task: raw[task_idx].clone(),
                start_date,
                end_date,
            });
        }

        if !rows.is_empty() {
            if parsed_starts == 0 {
                return Err(DatasetError::NoParsableDates {
                    column: "Start Date".to_string(),
                });
            }
            if parsed_ends == 0 {
                return Err(DatasetError::NoParsableDates {
                    column: "End Date".to_string(),
                });
            }
        }

        Ok(Self::from_rows(rows))
    }

    /// Builds a dataset directly from rows, for callers that assemble
    /// schedule data programmatically.
    pub fn from_rows(rows: Vec<ScheduleRow>) -> ScheduleDataset {
        let rows_with_null_dates = rows.iter().filter(|r| !r.has_complete_dates()).count();
        let fingerprint = fingerprint_rows(&rows);
        ScheduleDataset {
            rows,
            rows_with_null_dates,
            fingerprint,
        }
    }

    /// Derives a dataset holding `rows` while keeping this dataset's
    /// fingerprint, so windowed subsets still identify their source input.
    pub(crate) fn with_rows(&self, rows: Vec<ScheduleRow>) -> ScheduleDataset {
        let rows_with_null_dates = rows.iter().filter(|r| !r.has_complete_dates()).count();
        ScheduleDataset {
            rows,
            rows_with_null_dates,
            fingerprint: self.fingerprint.clone(),
        }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows missing at least one of the two dates.
    pub fn rows_with_null_dates(&self) -> usize {
        self.rows_with_null_dates
    }

    /// Lowercase hex SHA-256 over the canonical row serialization.
    ///
    /// Two inputs that parse to the same rows share a fingerprint even when
    /// their surface text differs (`2025/01/02` and `2025-01-02` for
    /// example), so re-uploads of the same schedule are recognized.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// The inclusive window from the earliest known start to the latest
    /// known end, or `None` when either is unknown for every row.
    ///
    /// With pathological data (every end before every start) the window
    /// comes back reversed and matches nothing, which mirrors what the rows
    /// would show on a chart.
    pub fn date_span(&self) -> Option<DateWindow> {
        let start = self.rows.iter().filter_map(|r| r.start_date).min()?;
        let end = self.rows.iter().filter_map(|r| r.end_date).max()?;
        Some(DateWindow::new(start, end))
    }
}

fn fingerprint_rows(rows: &[ScheduleRow]) -> String {
    let mut hasher = Sha256::new();
    for row in rows {
        for field in [
            &row.main_domain,
            &row.sub_domain,
            &row.subject_area,
            &row.task,
        ] {
            hasher.update(field.as_bytes());
            hasher.update([0x1f]);
        }
        hasher.update(canonical_date(row.start_date).as_bytes());
        hasher.update([0x1f]);
        hasher.update(canonical_date(row.end_date).as_bytes());
        hasher.update([0x0a]);
    }
    hex::encode(hasher.finalize())
}

fn canonical_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
