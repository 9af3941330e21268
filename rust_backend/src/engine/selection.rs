use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::domain::{DateWindow, DomainLevel, ScheduleRow};

/// How the date window decides whether a row passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// Keep rows whose whole `[start, end]` span lies inside the window.
    ///
    /// This silently drops tasks reaching past either window edge, which is
    /// what schedule dashboards have historically shown.
    #[default]
    Containment,
    /// Keep rows sharing at least one day with the window.
    Overlap,
}

/// What the date window does with rows missing a start or end date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullDatePolicy {
    /// Rows with an unknown date never pass window filtering.
    #[default]
    Exclude,
    /// Rows with an unknown date always pass window filtering.
    Include,
}

/// Configurable points of the filter pipeline, bundled for passing around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPolicy {
    pub window_mode: WindowMode,
    pub null_dates: NullDatePolicy,
}

/// What the user has picked: selected values per hierarchy level plus an
/// optional date window.
///
/// An empty set at a level means "no restriction there", never "match
/// nothing"; selecting nothing in a host multiselect shows everything. The
/// sets are ordered so serialized selections are stable.
///
/// # Examples
///
/// ```
/// use gantt_rust::engine::FilterSelection;
///
/// let mut selection = FilterSelection::default();
/// assert!(selection.is_unrestricted());
///
/// selection.main_domains.insert("Engineering".to_string());
/// assert!(!selection.is_unrestricted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub main_domains: BTreeSet<String>,
    pub sub_domains: BTreeSet<String>,
    pub subject_areas: BTreeSet<String>,
    pub date_window: Option<DateWindow>,
}

impl FilterSelection {
    /// True when no level is restricted and no window is set.
    pub fn is_unrestricted(&self) -> bool {
        self.main_domains.is_empty()
            && self.sub_domains.is_empty()
            && self.subject_areas.is_empty()
            && self.date_window.is_none()
    }

    /// Drops every restriction.
    pub fn clear(&mut self) {
        self.main_domains.clear();
        self.sub_domains.clear();
        self.subject_areas.clear();
        self.date_window = None;
    }

    pub fn level(&self, level: DomainLevel) -> &BTreeSet<String> {
        match level {
            DomainLevel::MainDomain => &self.main_domains,
            DomainLevel::SubDomain => &self.sub_domains,
            DomainLevel::SubjectArea => &self.subject_areas,
        }
    }

    pub fn level_mut(&mut self, level: DomainLevel) -> &mut BTreeSet<String> {
        match level {
            DomainLevel::MainDomain => &mut self.main_domains,
            DomainLevel::SubDomain => &mut self.sub_domains,
            DomainLevel::SubjectArea => &mut self.subject_areas,
        }
    }

    /// True when the row's value at every level is admitted.
    ///
    /// The date window is not consulted here; windowing happens separately
    /// so option derivation can share it.
    pub fn admits(&self, row: &ScheduleRow) -> bool {
        DomainLevel::all()
            .iter()
            .all(|&level| level_admits(self.level(level), row.level_value(level)))
    }

    /// True when the row's value at the given levels is admitted.
    pub(crate) fn admits_at(&self, row: &ScheduleRow, levels: &[DomainLevel]) -> bool {
        levels
            .iter()
            .all(|&level| level_admits(self.level(level), row.level_value(level)))
    }
}

fn level_admits(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}
