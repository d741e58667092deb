//! CSV Loader
//!
//! Reads the launch dataset from a delimited file. Columns are matched by
//! header name, so extra columns (index, flight number, ...) are ignored.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, LaunchRecord, Outcome};

/// Raw row as it appears in the file
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: String,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Launch dataset loader
pub struct DatasetLoader {
    /// Field delimiter
    delimiter: u8,
    /// Trim whitespace around fields
    trim: bool,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Create a loader for comma-separated files
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether surrounding whitespace is trimmed from fields
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Load the dataset from a file
    pub fn load(&self, path: &Path) -> DatasetResult<Dataset> {
        let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let dataset = self.load_reader(file)?.with_source(path);

        tracing::info!(
            path = ?path,
            records = dataset.len(),
            sites = dataset.sites().len(),
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Load the dataset from an in-memory string (useful for testing)
    pub fn load_str(&self, data: &str) -> DatasetResult<Dataset> {
        self.load_reader(data.as_bytes())
    }

    /// Load the dataset from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> DatasetResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            let raw: RawLaunchRow =
                row.deserialize(Some(&headers))
                    .map_err(|e| DatasetError::MalformedRow {
                        line,
                        error: e.to_string(),
                    })?;

            records.push(Self::convert(raw, line)?);
        }

        Ok(Dataset::from_records(records))
    }

    /// Enforce record invariants and build the typed record
    fn convert(raw: RawLaunchRow, line: u64) -> DatasetResult<LaunchRecord> {
        if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                line,
                value: raw.payload_mass_kg,
            });
        }

        let outcome = parse_class(&raw.class).ok_or_else(|| DatasetError::InvalidOutcome {
            line,
            value: raw.class.clone(),
        })?;

        Ok(LaunchRecord {
            launch_site: raw.launch_site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_version: raw.booster_version,
            booster_version_category: raw.booster_version_category,
        })
    }
}

/// Accept `0`/`1` as well as their float spellings (`0.0`, `1.0`)
fn parse_class(value: &str) -> Option<Outcome> {
    if let Ok(v) = value.parse::<i64>() {
        return Outcome::from_class(v);
    }
    match value.parse::<f64>() {
        Ok(v) if v == 0.0 => Some(Outcome::Failure),
        Ok(v) if v == 1.0 => Some(Outcome::Success),
        _ => None,
    }
}

/// Load a comma-separated dataset with default settings
pub fn load_dataset(path: &Path) -> DatasetResult<Dataset> {
    DatasetLoader::new().load(path)
}
