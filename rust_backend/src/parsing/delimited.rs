use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::table::{InputParseError, RawTable};

/// Field separator for delimited schedule text, on input and export alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    #[default]
    Tab,
}

/// A delimiter name that is neither `comma` nor `tab`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown delimiter `{0}`, expected `comma` or `tab`")]
pub struct UnknownDelimiter(pub String);

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }

    pub fn as_char(&self) -> char {
        self.as_byte() as char
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}

impl FromStr for Delimiter {
    type Err = UnknownDelimiter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comma" | "," => Ok(Delimiter::Comma),
            "tab" | "\t" => Ok(Delimiter::Tab),
            other => Err(UnknownDelimiter(other.to_string())),
        }
    }
}

/// Picks the field separator by inspecting the first non-blank line.
///
/// A tab anywhere on that line wins, because cells copied out of a
/// spreadsheet arrive tab-separated even when their values contain commas.
/// Text with no non-blank line defaults to comma.
pub fn sniff_delimiter(text: &str) -> Delimiter {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| {
            if line.contains('\t') {
                Delimiter::Tab
            } else {
                Delimiter::Comma
            }
        })
        .unwrap_or(Delimiter::Comma)
}

/// Parses delimited text into a [`RawTable`], sniffing the separator first.
pub fn parse_delimited(text: &str) -> Result<RawTable, InputParseError> {
    parse_delimited_with(text, sniff_delimiter(text))
}

/// Parses delimited text with an explicit separator.
///
/// The first row is the header row. Rows whose field count disagrees with
/// the header abort the parse with their line number; quoting and CRLF line
/// endings are handled by the reader.
pub fn parse_delimited_with(text: &str, delimiter: Delimiter) -> Result<RawTable, InputParseError> {
    if text.trim().is_empty() {
        return Err(InputParseError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(map_csv_error)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(map_csv_error)?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    RawTable::new(headers, rows)
}

fn map_csv_error(err: csv::Error) -> InputParseError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return InputParseError::UnequalLengths {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    InputParseError::Malformed(err)
}
