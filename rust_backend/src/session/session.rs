//! Per-user session state over the filter engine.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::{SessionError, SessionResult};
use crate::core::domain::DateWindow;
use crate::dataset::{ScheduleDataset, ScheduleValidator, ValidationReport};
use crate::engine::{
    derive_options, filter_dataset, CascadeOptions, FilterPolicy, FilterSelection, FilteredResult,
};
use crate::export::write_delimited;
use crate::parsing::{parse_delimited, parse_json_records, Delimiter, RawTable};

/// Summary of a dataset load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOutcome {
    pub fingerprint: String,
    pub total_rows: usize,
    pub rows_with_null_dates: usize,
    /// True when different data replaced a previously loaded dataset.
    pub replaced: bool,
}

/// One user's view of the engine: a loaded dataset plus the current
/// selection and filter policy.
///
/// Reads recompute through the engine on every call, so a session never
/// holds derived state that can go stale. Loading data with the same
/// fingerprint as the current dataset keeps both the dataset and the
/// selection; loading different data replaces the dataset and resets the
/// selection.
#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: Option<ScheduleDataset>,
    selection: FilterSelection,
    policy: FilterPolicy,
}

impl Session {
    /// Create an empty session with the given filter policy.
    pub fn new(policy: FilterPolicy) -> Self {
        Self {
            dataset: None,
            selection: FilterSelection::default(),
            policy,
        }
    }

    /// Parse delimited text and install the resulting dataset.
    pub fn load_delimited(&mut self, text: &str) -> SessionResult<LoadOutcome> {
        let table = parse_delimited(text)?;
        self.load_table(&table)
    }

    /// Parse a JSON record array and install the resulting dataset.
    pub fn load_json_records(&mut self, text: &str) -> SessionResult<LoadOutcome> {
        let table = parse_json_records(text)?;
        self.load_table(&table)
    }

    /// Build a dataset from an already parsed table and install it.
    pub fn load_table(&mut self, table: &RawTable) -> SessionResult<LoadOutcome> {
        let dataset = ScheduleDataset::from_table(table)?;
        Ok(self.install_dataset(dataset))
    }

    fn install_dataset(&mut self, dataset: ScheduleDataset) -> LoadOutcome {
        if let Some(current) = &self.dataset {
            if current.fingerprint() == dataset.fingerprint() {
                info!(
                    "Dataset {} already loaded, keeping selection",
                    short_fingerprint(current.fingerprint())
                );
                return LoadOutcome {
                    fingerprint: current.fingerprint().to_string(),
                    total_rows: current.len(),
                    rows_with_null_dates: current.rows_with_null_dates(),
                    replaced: false,
                };
            }
        }

        let replaced = self.dataset.is_some();
        let outcome = LoadOutcome {
            fingerprint: dataset.fingerprint().to_string(),
            total_rows: dataset.len(),
            rows_with_null_dates: dataset.rows_with_null_dates(),
            replaced,
        };

        info!(
            "Loaded dataset {} ({} rows, {} with null dates{})",
            short_fingerprint(dataset.fingerprint()),
            outcome.total_rows,
            outcome.rows_with_null_dates,
            if replaced { ", replacing previous" } else { "" }
        );

        self.dataset = Some(dataset);
        self.selection = FilterSelection::default();
        outcome
    }

    /// The loaded dataset, if any.
    pub fn dataset(&self) -> Option<&ScheduleDataset> {
        self.dataset.as_ref()
    }

    /// The current selection.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The current filter policy.
    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    /// Change the filter policy and reconcile the selection against it.
    pub fn set_policy(&mut self, policy: FilterPolicy) {
        self.policy = policy;
        self.reconcile();
    }

    /// Replace the selected main domains.
    pub fn set_main_domains<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selection.main_domains = values.into_iter().collect();
        self.reconcile();
    }

    /// Replace the selected sub domains.
    pub fn set_sub_domains<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selection.sub_domains = values.into_iter().collect();
        self.reconcile();
    }

    /// Replace the selected subject areas.
    pub fn set_subject_areas<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selection.subject_areas = values.into_iter().collect();
        self.reconcile();
    }

    /// Replace the date window. `None` falls back to the dataset span.
    pub fn set_date_window(&mut self, window: Option<DateWindow>) {
        self.selection.date_window = window;
        self.reconcile();
    }

    /// Replace the whole selection at once.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.reconcile();
    }

    /// Reset the selection to unrestricted.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drop selected values the cascade no longer offers, coarse to fine.
    ///
    /// Each level's options depend only on coarser selections, so pruning
    /// one level at a time converges in a single pass and a second call
    /// changes nothing.
    fn reconcile(&mut self) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        let before = self.selected_value_count();

        let offered = derive_options(dataset, &self.selection, &self.policy);
        let keep: BTreeSet<String> = offered.main_domains.into_iter().collect();
        self.selection.main_domains.retain(|v| keep.contains(v));

        let offered = derive_options(dataset, &self.selection, &self.policy);
        let keep: BTreeSet<String> = offered.sub_domains.into_iter().collect();
        self.selection.sub_domains.retain(|v| keep.contains(v));

        let offered = derive_options(dataset, &self.selection, &self.policy);
        let keep: BTreeSet<String> = offered.subject_areas.into_iter().collect();
        self.selection.subject_areas.retain(|v| keep.contains(v));

        let pruned = before - self.selected_value_count();
        if pruned > 0 {
            debug!("Pruned {} selected values the cascade no longer offers", pruned);
        }
    }

    fn selected_value_count(&self) -> usize {
        self.selection.main_domains.len()
            + self.selection.sub_domains.len()
            + self.selection.subject_areas.len()
    }

    fn required_dataset(&self) -> SessionResult<&ScheduleDataset> {
        self.dataset.as_ref().ok_or(SessionError::NoDataset)
    }

    /// Selectable values per level under the current state.
    pub fn options(&self) -> SessionResult<CascadeOptions> {
        let dataset = self.required_dataset()?;
        Ok(derive_options(dataset, &self.selection, &self.policy))
    }

    /// Filter and partition the dataset under the current state.
    pub fn filtered(&self) -> SessionResult<FilteredResult> {
        let dataset = self.required_dataset()?;
        Ok(filter_dataset(dataset, &self.selection, &self.policy))
    }

    /// Export the current filtered result as delimited text.
    pub fn export(&self, delimiter: Delimiter) -> SessionResult<String> {
        let result = self.filtered()?;
        Ok(write_delimited(&result, delimiter)?)
    }

    /// Advisory validation report for the loaded dataset.
    pub fn validation(&self) -> SessionResult<ValidationReport> {
        let dataset = self.required_dataset()?;
        Ok(ScheduleValidator::validate_dataset(dataset))
    }
}

fn short_fingerprint(fingerprint: &str) -> &str {
    &fingerprint[..fingerprint.len().min(12)]
}
