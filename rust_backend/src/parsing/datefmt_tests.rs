#[cfg(test)]
mod tests {
    use crate::parsing::datefmt::parse_date;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Test the ISO layout every exporter in the pipeline emits
    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2025-01-15"), Some(date(2025, 1, 15)));
    }

    /// Test slash and dot layouts seen in manual spreadsheet entry
    #[test]
    fn test_parse_alternate_layouts() {
        assert_eq!(parse_date("2025/01/15"), Some(date(2025, 1, 15)));
        assert_eq!(parse_date("15.01.2025"), Some(date(2025, 1, 15)));
        assert_eq!(parse_date("01/15/2025"), Some(date(2025, 1, 15)));
    }

    /// Test that day and month need no zero padding
    #[test]
    fn test_parse_unpadded_components() {
        // Same day through the dotted day-first and slashed month-first layouts.
        assert_eq!(parse_date("1.2.2025"), Some(date(2025, 2, 1)));
        assert_eq!(parse_date("2/1/2025"), Some(date(2025, 2, 1)));
    }

    /// Test ambiguous slashed values resolve to the US layout
    #[test]
    fn test_ambiguous_slash_is_month_first() {
        assert_eq!(parse_date("03/04/2025"), Some(date(2025, 3, 4)));
    }

    /// Test that a midnight timestamp suffix is tolerated
    #[test]
    fn test_parse_datetime_suffix() {
        assert_eq!(parse_date("2025-01-15 00:00:00"), Some(date(2025, 1, 15)));
        assert_eq!(parse_date("2025-01-15 13:45:30"), Some(date(2025, 1, 15)));
    }

    /// Test surrounding whitespace is ignored
    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_date("  2025-01-15  "), Some(date(2025, 1, 15)));
    }

    /// Test blank cells coerce to None rather than erroring
    #[test]
    fn test_blank_cells_are_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
    }

    /// Test unrecognized text coerces to None rather than erroring
    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_date("TBD"), None);
        assert_eq!(parse_date("next sprint"), None);
        assert_eq!(parse_date("2025-13-99"), None);
    }

    /// Test calendar-invalid dates are rejected, not clamped
    #[test]
    fn test_invalid_calendar_dates_are_none() {
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("31.04.2025"), None);
    }

    /// Test leap day handling
    #[test]
    fn test_leap_days() {
        assert_eq!(parse_date("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(parse_date("2025-02-29"), None);
    }
}
