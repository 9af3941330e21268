use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::domain::{DateWindow, ScheduleRow};
use crate::dataset::ScheduleDataset;
use crate::engine::selection::{FilterPolicy, FilterSelection, NullDatePolicy, WindowMode};

/// Rows of one main domain, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainGroup {
    pub main_domain: String,
    pub rows: Vec<ScheduleRow>,
}

/// The filtered dataset partitioned by main domain, one group per chart.
///
/// Groups appear in first-appearance order of their main domain in the
/// sorted row sequence; rows inside a group keep that sort order. An empty
/// result is the ordinary "nothing matched" outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredResult {
    pub groups: Vec<DomainGroup>,
}

impl FilteredResult {
    pub fn total_rows(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Rows across all groups, in group order.
    pub fn flattened(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    pub fn group(&self, main_domain: &str) -> Option<&DomainGroup> {
        self.groups.iter().find(|g| g.main_domain == main_domain)
    }
}

/// Keeps the rows passing `window` under the policy, as a derived dataset.
///
/// The result keeps the source dataset's fingerprint: a windowed subset
/// still identifies the input it came from. The input dataset is untouched.
pub fn apply_date_window(
    dataset: &ScheduleDataset,
    window: &DateWindow,
    policy: &FilterPolicy,
) -> ScheduleDataset {
    let rows = dataset
        .rows()
        .iter()
        .filter(|row| passes_window(row, Some(window), policy))
        .cloned()
        .collect();
    dataset.with_rows(rows)
}

/// Filters and partitions a dataset in one pass.
///
/// Stages, in order: the effective date window (the explicit one, or the
/// dataset's full span when the selection has none), then set-membership at
/// each hierarchy level, then a stable sort by sub domain and start date,
/// then partitioning by main domain. Same inputs give an identical result;
/// nothing is cached or mutated.
pub fn filter_dataset(
    dataset: &ScheduleDataset,
    selection: &FilterSelection,
    policy: &FilterPolicy,
) -> FilteredResult {
    let mut rows: Vec<ScheduleRow> = windowed_rows(dataset, selection, policy)
        .into_iter()
        .filter(|row| selection.admits(row))
        .cloned()
        .collect();

    // Stable sort keeps input order for ties, so equal keys never reshuffle.
    rows.sort_by(|a, b| {
        a.sub_domain
            .cmp(&b.sub_domain)
            .then_with(|| cmp_start_dates(a.start_date, b.start_date))
    });

    let mut groups: Vec<DomainGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for row in rows {
        if let Some(&slot) = slots.get(&row.main_domain) {
            groups[slot].rows.push(row);
        } else {
            slots.insert(row.main_domain.clone(), groups.len());
            groups.push(DomainGroup {
                main_domain: row.main_domain.clone(),
                rows: vec![row],
            });
        }
    }

    FilteredResult { groups }
}

/// The window actually applied: the selection's, else the dataset span.
pub fn effective_window(
    dataset: &ScheduleDataset,
    selection: &FilterSelection,
) -> Option<DateWindow> {
    selection.date_window.or_else(|| dataset.date_span())
}

/// Rows passing the effective date window, in input order.
pub(crate) fn windowed_rows<'a>(
    dataset: &'a ScheduleDataset,
    selection: &FilterSelection,
    policy: &FilterPolicy,
) -> Vec<&'a ScheduleRow> {
    let window = effective_window(dataset, selection);
    dataset
        .rows()
        .iter()
        .filter(|row| passes_window(row, window.as_ref(), policy))
        .collect()
}

fn passes_window(row: &ScheduleRow, window: Option<&DateWindow>, policy: &FilterPolicy) -> bool {
    match (row.start_date, row.end_date) {
        (Some(start), Some(end)) => match window {
            Some(w) => match policy.window_mode {
                WindowMode::Containment => w.surrounds(start, end),
                WindowMode::Overlap => w.overlaps(start, end),
            },
            None => true,
        },
        _ => matches!(policy.null_dates, NullDatePolicy::Include),
    }
}

fn cmp_start_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    // Unknown starts sort after known ones, unlike the derived Option order.
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
