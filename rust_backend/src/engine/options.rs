use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::domain::DomainLevel;
use crate::dataset::ScheduleDataset;
use crate::engine::filter::windowed_rows;
use crate::engine::selection::{FilterPolicy, FilterSelection};

/// The values each filter widget should offer, already sorted.
///
/// Blank values never appear; a level whose candidate rows all have blank
/// values offers an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeOptions {
    pub main_domains: Vec<String>,
    pub sub_domains: Vec<String>,
    pub subject_areas: Vec<String>,
}

impl CascadeOptions {
    pub fn level(&self, level: DomainLevel) -> &[String] {
        match level {
            DomainLevel::MainDomain => &self.main_domains,
            DomainLevel::SubDomain => &self.sub_domains,
            DomainLevel::SubjectArea => &self.subject_areas,
        }
    }
}

/// Derives the cascading option lists for the current selection.
///
/// Every level is computed over the date-windowed rows. Main domain options
/// ignore the level selections entirely; sub domain options honor the main
/// domain selection; subject area options honor both coarser levels. A
/// level's own selection never narrows its own options, so picking a value
/// does not hide its siblings.
///
/// A selection narrowing to zero rows yields empty option lists at the finer
/// levels, never an error.
pub fn derive_options(
    dataset: &ScheduleDataset,
    selection: &FilterSelection,
    policy: &FilterPolicy,
) -> CascadeOptions {
    let windowed = windowed_rows(dataset, selection, policy);

    let collect = |conditioning: &[DomainLevel], level: DomainLevel| -> Vec<String> {
        windowed
            .iter()
            .filter(|row| selection.admits_at(row, conditioning))
            .map(|row| row.level_value(level))
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    };

    CascadeOptions {
        main_domains: collect(&[], DomainLevel::MainDomain),
        sub_domains: collect(&[DomainLevel::MainDomain], DomainLevel::SubDomain),
        subject_areas: collect(
            &[DomainLevel::MainDomain, DomainLevel::SubDomain],
            DomainLevel::SubjectArea,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{DateWindow, ScheduleRow};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(main: &str, sub: &str, area: &str, task: &str) -> ScheduleRow {
        ScheduleRow {
            main_domain: main.to_string(),
            sub_domain: sub.to_string(),
            subject_area: area.to_string(),
            task: task.to_string(),
            start_date: Some(date(2025, 1, 1)),
            end_date: Some(date(2025, 1, 10)),
        }
    }

    fn sample_dataset() -> ScheduleDataset {
        ScheduleDataset::from_rows(vec![
            row("A", "X", "P", "T1"),
            row("A", "Y", "Q", "T2"),
            row("B", "X", "P", "T3"),
            row("B", "Z", "R", "T4"),
        ])
    }

    #[test]
    fn unrestricted_selection_offers_all_values_sorted() {
        let options = derive_options(
            &sample_dataset(),
            &FilterSelection::default(),
            &FilterPolicy::default(),
        );

        assert_eq!(options.main_domains, ["A", "B"]);
        assert_eq!(options.sub_domains, ["X", "Y", "Z"]);
        assert_eq!(options.subject_areas, ["P", "Q", "R"]);
    }

    #[test]
    fn finer_levels_follow_coarser_selections() {
        let mut selection = FilterSelection::default();
        selection.main_domains.insert("A".to_string());

        let options = derive_options(
            &sample_dataset(),
            &selection,
            &FilterPolicy::default(),
        );

        assert_eq!(options.main_domains, ["A", "B"], "a level never hides its own siblings");
        assert_eq!(options.sub_domains, ["X", "Y"]);
        assert_eq!(options.subject_areas, ["P", "Q"]);
    }

    #[test]
    fn subject_areas_honor_both_coarser_levels() {
        let mut selection = FilterSelection::default();
        selection.main_domains.insert("A".to_string());
        selection.sub_domains.insert("Y".to_string());

        let options = derive_options(
            &sample_dataset(),
            &selection,
            &FilterPolicy::default(),
        );

        assert_eq!(options.sub_domains, ["X", "Y"]);
        assert_eq!(options.subject_areas, ["Q"]);
    }

    #[test]
    fn impossible_selection_yields_empty_finer_options() {
        let mut selection = FilterSelection::default();
        selection.main_domains.insert("no such domain".to_string());

        let options = derive_options(
            &sample_dataset(),
            &selection,
            &FilterPolicy::default(),
        );

        assert_eq!(options.main_domains, ["A", "B"]);
        assert!(options.sub_domains.is_empty());
        assert!(options.subject_areas.is_empty());
    }

    #[test]
    fn blank_values_never_become_options() {
        let dataset = ScheduleDataset::from_rows(vec![
            row("A", "", "P", "T1"),
            row("", "X", "", "T2"),
        ]);

        let options = derive_options(
            &dataset,
            &FilterSelection::default(),
            &FilterPolicy::default(),
        );

        assert_eq!(options.main_domains, ["A"]);
        assert_eq!(options.sub_domains, ["X"]);
        assert_eq!(options.subject_areas, ["P"]);
    }

    #[test]
    fn window_restricts_candidate_rows() {
        let mut rows = vec![
            row("A", "X", "P", "inside"),
            row("C", "W", "S", "outside"),
        ];
        rows[1].start_date = Some(date(2026, 6, 1));
        rows[1].end_date = Some(date(2026, 6, 30));
        let dataset = ScheduleDataset::from_rows(rows);

        let mut selection = FilterSelection::default();
        selection.date_window = Some(DateWindow::new(date(2025, 1, 1), date(2025, 12, 31)));

        let options = derive_options(&dataset, &selection, &FilterPolicy::default());

        assert_eq!(options.main_domains, ["A"]);
        assert!(!options.main_domains.contains(&"C".to_string()));
    }

    #[test]
    fn widening_a_coarse_selection_only_adds_finer_options() {
        let dataset = sample_dataset();
        let mut narrow = FilterSelection::default();
        narrow.main_domains.insert("A".to_string());

        let mut wide = narrow.clone();
        wide.main_domains.insert("B".to_string());

        let narrow_options = derive_options(&dataset, &narrow, &FilterPolicy::default());
        let wide_options = derive_options(&dataset, &wide, &FilterPolicy::default());

        for sub in &narrow_options.sub_domains {
            assert!(wide_options.sub_domains.contains(sub));
        }
        for area in &narrow_options.subject_areas {
            assert!(wide_options.subject_areas.contains(area));
        }
    }
}
