use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

use crate::dataset::ScheduleDataset;
use crate::parsing::{parse_delimited, parse_delimited_with, parse_json_records, Delimiter};

/// Represents the source format schedule data was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSourceType {
    Json,
    Delimited,
}

/// Result of loading schedule data
#[derive(Debug, Clone)]
pub struct ScheduleLoadResult {
    pub dataset: ScheduleDataset,
    pub source_type: ScheduleSourceType,
    pub num_rows: usize,
}

impl ScheduleLoadResult {
    pub fn new(dataset: ScheduleDataset, source_type: ScheduleSourceType) -> Self {
        let num_rows = dataset.len();
        if dataset.rows_with_null_dates() > 0 {
            warn!(
                "{} of {} loaded rows are missing a usable start or end date",
                dataset.rows_with_null_dates(),
                num_rows
            );
        }
        Self {
            dataset,
            source_type,
            num_rows,
        }
    }
}

/// Unified interface for loading schedule data from delimited text or JSON
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Load schedule data from a file (auto-detects the format by extension)
    ///
    /// `.csv`, `.tsv` and `.txt` files are parsed as delimited text with the
    /// delimiter sniffed from the content; `.json` files are parsed as a
    /// record array.
    pub fn load_from_file(path: &Path) -> Result<ScheduleLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_json(path),
            "csv" | "tsv" | "txt" => Self::load_from_delimited(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load schedule data from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<ScheduleLoadResult> {
        let content = fs::read_to_string(json_path)
            .with_context(|| format!("Failed to read {}", json_path.display()))?;

        Self::load_from_json_str(&content)
    }

    /// Load schedule data from a JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<ScheduleLoadResult> {
        let table = parse_json_records(json_str).context("Failed to parse JSON records")?;

        let dataset =
            ScheduleDataset::from_table(&table).context("Failed to build schedule dataset")?;

        Ok(ScheduleLoadResult::new(dataset, ScheduleSourceType::Json))
    }

    /// Load schedule data from a delimited text file
    pub fn load_from_delimited(text_path: &Path) -> Result<ScheduleLoadResult> {
        let content = fs::read_to_string(text_path)
            .with_context(|| format!("Failed to read {}", text_path.display()))?;

        Self::load_from_delimited_str(&content)
    }

    /// Load schedule data from a delimited string, sniffing the delimiter
    pub fn load_from_delimited_str(text: &str) -> Result<ScheduleLoadResult> {
        let table = parse_delimited(text).context("Failed to parse delimited input")?;

        let dataset =
            ScheduleDataset::from_table(&table).context("Failed to build schedule dataset")?;

        Ok(ScheduleLoadResult::new(
            dataset,
            ScheduleSourceType::Delimited,
        ))
    }

    /// Load schedule data from a delimited string with an explicit delimiter
    pub fn load_from_delimited_str_with(
        text: &str,
        delimiter: Delimiter,
    ) -> Result<ScheduleLoadResult> {
        let table =
            parse_delimited_with(text, delimiter).context("Failed to parse delimited input")?;

        let dataset =
            ScheduleDataset::from_table(&table).context("Failed to build schedule dataset")?;

        Ok(ScheduleLoadResult::new(
            dataset,
            ScheduleSourceType::Delimited,
        ))
    }
}
