#[cfg(test)]
mod tests {
    use crate::dataset::schedule::{DatasetError, ScheduleDataset};
    use crate::parsing::parse_delimited;
    use chrono::NaiveDate;

    const FULL_HEADER: &str = "Main Domain,Sub Domain,Subject Area,Task,Start Date,End Date";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Test a well-formed table loads with every field populated
    #[test]
    fn test_from_table_basic() {
        let text = format!(
            "{FULL_HEADER}\n\
             Engineering,Platform,Storage,Migrate volumes,2025-01-01,2025-01-10\n\
             Science,Imaging,Optics,Align mirrors,2025-02-01,2025-03-15\n"
        );
        let table = parse_delimited(&text).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows_with_null_dates(), 0);

        let first = &dataset.rows()[0];
        assert_eq!(first.main_domain, "Engineering");
        assert_eq!(first.sub_domain, "Platform");
        assert_eq!(first.subject_area, "Storage");
        assert_eq!(first.task, "Migrate volumes");
        assert_eq!(first.start_date, Some(date(2025, 1, 1)));
        assert_eq!(first.end_date, Some(date(2025, 1, 10)));
    }

    /// Test missing columns fail construction and are all named
    #[test]
    fn test_missing_columns_all_named() {
        let table = parse_delimited("Task,Start Date\nKickoff,2025-01-01\n").unwrap();
        let err = ScheduleDataset::from_table(&table).unwrap_err();

        match &err {
            DatasetError::MissingColumns { missing } => {
                assert_eq!(
                    missing,
                    &["Main Domain", "Sub Domain", "Subject Area", "End Date"]
                );
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }

        let message = err.to_string();
        assert!(message.contains("Main Domain"));
        assert!(
            message.contains("required:"),
            "message should state the full required set: {message}"
        );
    }

    /// Test column matching is case-sensitive
    #[test]
    fn test_column_match_is_case_sensitive() {
        let text = "main domain,Sub Domain,Subject Area,Task,Start Date,End Date\n\
                    A,X,P,T,2025-01-01,2025-01-02\n";
        let table = parse_delimited(text).unwrap();
        let err = ScheduleDataset::from_table(&table).unwrap_err();

        assert!(matches!(err, DatasetError::MissingColumns { ref missing }
            if missing == &["Main Domain"]));
    }

    /// Test bad date cells coerce to None instead of failing the load
    #[test]
    fn test_bad_date_cells_coerce_to_none() {
        let text = format!(
            "{FULL_HEADER}\n\
             A,X,P,T1,2025-01-01,2025-01-10\n\
             A,X,P,T2,not-a-date,2025-01-20\n\
             A,X,P,T3,2025-01-02,\n"
        );
        let table = parse_delimited(&text).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows_with_null_dates(), 2);
        assert_eq!(dataset.rows()[1].start_date, None);
        assert_eq!(dataset.rows()[2].end_date, None);
    }

    /// Test mixed date layouts in one column all parse
    #[test]
    fn test_mixed_date_layouts() {
        let text = format!(
            "{FULL_HEADER}\n\
             A,X,P,T1,2025-01-01,2025/01/10\n\
             A,X,P,T2,15.01.2025,01/20/2025\n"
        );
        let table = parse_delimited(&text).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        assert_eq!(dataset.rows_with_null_dates(), 0);
        assert_eq!(dataset.rows()[1].start_date, Some(date(2025, 1, 15)));
        assert_eq!(dataset.rows()[1].end_date, Some(date(2025, 1, 20)));
    }

    /// Test a date column with zero parseable values fails construction
    #[test]
    fn test_all_unparseable_date_column_fails() {
        let text = format!(
            "{FULL_HEADER}\n\
             A,X,P,T1,soon,2025-01-10\n\
             A,X,P,T2,later,2025-01-20\n"
        );
        let table = parse_delimited(&text).unwrap();
        let err = ScheduleDataset::from_table(&table).unwrap_err();

        assert!(matches!(err, DatasetError::NoParsableDates { ref column }
            if column == "Start Date"));
    }

    /// Test a header-only table builds an empty dataset
    #[test]
    fn test_header_only_table_is_empty_dataset() {
        let table = parse_delimited(&format!("{FULL_HEADER}\n")).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        assert!(dataset.is_empty());
        assert_eq!(dataset.date_span(), None);
    }

    /// Test rows with end before start load unchanged
    #[test]
    fn test_misordered_rows_pass_through() {
        let text = format!("{FULL_HEADER}\nA,X,P,T1,2025-01-10,2025-01-01\n");
        let table = parse_delimited(&text).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        assert_eq!(dataset.len(), 1);
        assert!(dataset.rows()[0].is_misordered());
    }

    /// Test extra columns are ignored
    #[test]
    fn test_extra_columns_ignored() {
        let text = "Owner,Main Domain,Sub Domain,Subject Area,Task,Start Date,End Date\n\
                    aria,A,X,P,T1,2025-01-01,2025-01-02\n";
        let table = parse_delimited(text).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows()[0].main_domain, "A");
    }

    /// Test the span runs from earliest start to latest end
    #[test]
    fn test_date_span() {
        let text = format!(
            "{FULL_HEADER}\n\
             A,X,P,T1,2025-03-01,2025-03-10\n\
             A,X,P,T2,2025-01-05,2025-02-01\n\
             A,X,P,T3,2025-02-01,2025-06-30\n"
        );
        let table = parse_delimited(&text).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        let span = dataset.date_span().unwrap();
        assert_eq!(span.start, date(2025, 1, 5));
        assert_eq!(span.end, date(2025, 6, 30));
    }

    /// Test re-parsing equivalent input yields the same fingerprint
    #[test]
    fn test_fingerprint_is_stable_across_surface_forms() {
        let iso = format!("{FULL_HEADER}\nA,X,P,T1,2025-01-02,2025-01-10\n");
        let slashed = format!("{FULL_HEADER}\nA,X,P,T1,2025/01/02,2025/01/10\n");
        let other = format!("{FULL_HEADER}\nA,X,P,T1,2025-01-03,2025-01-10\n");

        let fp = |text: &str| {
            let table = parse_delimited(text).unwrap();
            ScheduleDataset::from_table(&table)
                .unwrap()
                .fingerprint()
                .to_string()
        };

        assert_eq!(fp(&iso), fp(&slashed), "same parsed rows, same identity");
        assert_ne!(fp(&iso), fp(&other));
        assert_eq!(fp(&iso).len(), 64);
    }

    /// Test row-level derivations keep the source fingerprint
    #[test]
    fn test_derived_dataset_keeps_fingerprint() {
        let text = format!(
            "{FULL_HEADER}\n\
             A,X,P,T1,2025-01-01,2025-01-10\n\
             A,X,P,T2,2025-05-01,2025-05-10\n"
        );
        let table = parse_delimited(&text).unwrap();
        let dataset = ScheduleDataset::from_table(&table).unwrap();

        let subset = dataset.with_rows(vec![dataset.rows()[0].clone()]);
        assert_eq!(subset.len(), 1);
        assert_eq!(
            subset.fingerprint(),
            dataset.fingerprint(),
            "a subset still identifies the input it came from"
        );
    }
}
