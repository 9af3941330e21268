use chrono::NaiveDate;
use thiserror::Error;

use crate::core::domain::REQUIRED_COLUMNS;
use crate::engine::FilteredResult;
use crate::parsing::Delimiter;

/// Errors while serializing a filtered result to delimited text.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize rows: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush serialized output: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialized output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a filtered result as delimited text.
///
/// One header row in the canonical column order, then the flattened rows in
/// group order. Dates are written as `%Y-%m-%d`; unknown dates become empty
/// cells, so a re-import parses them back to unknown. Fields containing the
/// active separator are quoted.
///
/// The same function backs both the host's on-screen text rendering (tab)
/// and its downloadable export (comma); only the delimiter differs.
pub fn write_delimited(
    result: &FilteredResult,
    delimiter: Delimiter,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter.as_byte())
            .from_writer(&mut buffer);

        writer.write_record(REQUIRED_COLUMNS)?;
        for row in result.flattened() {
            let start = date_text(row.start_date);
            let end = date_text(row.end_date);
            writer.write_record([
                row.main_domain.as_str(),
                row.sub_domain.as_str(),
                row.subject_area.as_str(),
                row.task.as_str(),
                start.as_str(),
                end.as_str(),
            ])?;
        }
        writer.flush()?;
    }

    Ok(String::from_utf8(buffer)?)
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
