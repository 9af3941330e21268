use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

/// Date layouts accepted by [`parse_date`], tried in order.
///
/// The order decides ambiguous values: `03/04/2025` is read as March 4th
/// (US layout), because the year-first layouts reject it before the
/// day-first dotted layout is reached.
pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

// Spreadsheet exports often append a midnight timestamp to date cells.
static DATETIME_FORMATS: Lazy<Vec<String>> = Lazy::new(|| {
    DATE_FORMATS
        .iter()
        .map(|fmt| format!("{fmt} %H:%M:%S"))
        .collect()
});

/// Parses one date cell, returning `None` for blank or unrecognized values.
///
/// This is deliberately coercive: a schedule upload with a handful of bad
/// date cells must still load, with the bad cells marked unknown rather than
/// failing the whole table. Callers that need to distinguish "blank" from
/// "unparseable" check the raw cell themselves.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gantt_rust::parsing::datefmt::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 3, 4);
/// assert_eq!(parse_date("2025-03-04"), expected);
/// assert_eq!(parse_date("2025/03/04"), expected);
/// assert_eq!(parse_date("04.03.2025"), expected);
/// assert_eq!(parse_date("03/04/2025"), expected);
/// assert_eq!(parse_date("2025-03-04 00:00:00"), expected);
///
/// assert_eq!(parse_date(""), None);
/// assert_eq!(parse_date("next Tuesday"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(stamp.date());
        }
    }
    None
}
