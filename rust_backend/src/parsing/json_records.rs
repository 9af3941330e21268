use std::collections::BTreeSet;

use serde_json::Value;

use crate::parsing::table::{InputParseError, RawTable};

/// Parses a `[{column: value, ...}, ...]` record array into a [`RawTable`].
///
/// This is the shape `DataFrame.to_json(orient="records")` produces, which
/// is how dataframe hosts hand tables across the FFI boundary. Headers are
/// the sorted union of all record keys; keys missing from a record become
/// blank cells, and scalar values are stringified the way they would appear
/// in a delimited file. Deserialization failures carry the path of the
/// offending element (for example `[2].Start Date`).
pub fn parse_json_records(text: &str) -> Result<RawTable, InputParseError> {
    if text.trim().is_empty() {
        return Err(InputParseError::Empty);
    }

    let mut deserializer = serde_json::Deserializer::from_str(text);
    let records: Vec<Value> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            InputParseError::JsonRecords {
                path: err.path().to_string(),
                source: err.into_inner(),
            }
        })?;

    let mut maps = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match record {
            Value::Object(map) => maps.push(map),
            _ => return Err(InputParseError::NotAnObject { index }),
        }
    }

    let mut headers: BTreeSet<String> = BTreeSet::new();
    for map in &maps {
        headers.extend(map.keys().cloned());
    }
    if headers.is_empty() {
        // An empty record array carries no columns to build a table from.
        return Err(InputParseError::Empty);
    }

    let headers: Vec<String> = headers.into_iter().collect();
    let rows = maps
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    RawTable::new(headers, rows)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
