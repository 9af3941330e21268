use thiserror::Error;

/// Errors produced while turning raw user input into a [`RawTable`].
///
/// Malformed input never yields a partial table: the first structural
/// problem aborts the parse.
#[derive(Debug, Error)]
pub enum InputParseError {
    /// The input contained no header row (blank text, empty record array).
    #[error("input contains no table data")]
    Empty,

    /// A row's field count disagrees with the header row.
    ///
    /// `line` counts the header as line 1, so the first data row is line 2.
    #[error("row at line {line} has {found} fields, expected {expected}")]
    UnequalLengths {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The delimited reader failed for a reason other than field count.
    #[error("malformed delimited input: {0}")]
    Malformed(#[from] csv::Error),

    /// A JSON record payload failed to deserialize; `path` locates the
    /// offending element (for example `[2].Start Date`).
    #[error("malformed JSON records at `{path}`: {source}")]
    JsonRecords {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An element of a JSON record array was not an object.
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
}

/// A rectangular table of named string fields, the only input shape dataset
/// construction accepts.
///
/// Every parser funnels into this type, so the column checks and date
/// coercion downstream behave identically for pasted text, files and JSON
/// payloads. Headers and cells are stored whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table from a header row and data rows.
    ///
    /// Headers and cells are trimmed. Fails with
    /// [`InputParseError::UnequalLengths`] if any row's width differs from
    /// the header width, and with [`InputParseError::Empty`] if there are no
    /// headers at all. A header row with zero data rows is a valid, empty
    /// table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, InputParseError> {
        if headers.is_empty() {
            return Err(InputParseError::Empty);
        }
        let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let expected = headers.len();

        let mut trimmed_rows = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != expected {
                return Err(InputParseError::UnequalLengths {
                    line: index as u64 + 2,
                    expected,
                    found: row.len(),
                });
            }
            trimmed_rows.push(row.into_iter().map(|c| c.trim().to_string()).collect());
        }

        Ok(Self {
            headers,
            rows: trimmed_rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header row is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact, case-sensitive header match.
    ///
    /// When the same header appears twice, the first occurrence wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn construction_trims_headers_and_cells() {
        let table = RawTable::new(
            strings(&[" Task ", "Start Date"]),
            vec![strings(&["  Kickoff", " 2025-01-01 "])],
        )
        .unwrap();

        assert_eq!(table.headers(), ["Task", "Start Date"]);
        assert_eq!(table.rows()[0], ["Kickoff", "2025-01-01"]);
    }

    #[test]
    fn header_only_table_is_empty_but_valid() {
        let table = RawTable::new(strings(&["Task"]), vec![]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn missing_headers_are_rejected() {
        let result = RawTable::new(vec![], vec![strings(&["orphan"])]);
        assert!(matches!(result, Err(InputParseError::Empty)));
    }

    #[test]
    fn ragged_rows_report_their_line() {
        let result = RawTable::new(
            strings(&["Task", "Start Date"]),
            vec![
                strings(&["Kickoff", "2025-01-01"]),
                strings(&["Too short"]),
            ],
        );

        match result {
            Err(InputParseError::UnequalLengths {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected UnequalLengths, got {:?}", other),
        }
    }

    #[test]
    fn column_lookup_is_exact_and_case_sensitive() {
        let table = RawTable::new(strings(&["Task", "Start Date"]), vec![]).unwrap();

        assert_eq!(table.column_index("Task"), Some(0));
        assert_eq!(table.column_index("Start Date"), Some(1));
        assert_eq!(table.column_index("task"), None);
        assert_eq!(table.column_index("start date"), None);
    }
}
