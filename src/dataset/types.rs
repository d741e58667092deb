//! Core data types for the launch dataset
//!
//! - `Outcome`: success/failure flag of one launch
//! - `LaunchRecord`: one row of the dataset
//! - `Dataset`: the full, immutable set of records
//! - `PayloadBounds`: observed payload extremes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of a single launch attempt, stored as 1 (success) or 0 (failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value as it appears in the `class` column
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Decode a `class` column value
    pub fn from_class(value: i64) -> Option<Self> {
        match value {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Human-readable label used on charts
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single launch attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// Launch facility identifier (e.g., "KSC LC-39A")
    pub launch_site: String,
    /// Payload mass in kilograms, never negative
    pub payload_mass_kg: f64,
    /// Whether the launch succeeded
    pub outcome: Outcome,
    /// Booster identifier, shown on hover only
    pub booster_version: String,
    /// Booster family, used to color scatter points
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Create a new launch record
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version: impl Into<String>,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version: booster_version.into(),
            booster_version_category: booster_version_category.into(),
        }
    }
}

/// Observed minimum and maximum payload mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// The launch dataset, loaded once and never mutated
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Build a dataset from already-decoded records
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self {
            records,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Attach the file this dataset was read from
    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// All records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the file the dataset was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct launch sites, sorted by name
    pub fn sites(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Observed payload extremes, `None` when the dataset is empty
    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(PayloadBounds { min, max })
    }

    /// Number of successful launches
    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "F9 FT B1031.1", "FT"),
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "F9 v1.0  B0003", "v1.0"),
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Failure, "F9 FT B1030", "FT"),
        ])
    }

    #[test]
    fn test_outcome_class_mapping() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.as_class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }

    #[test]
    fn test_sites_sorted_and_distinct() {
        let dataset = sample();
        assert_eq!(dataset.sites(), vec!["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn test_payload_bounds() {
        let bounds = sample().payload_bounds().unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 5300.0);

        assert!(Dataset::from_records(vec![]).payload_bounds().is_none());
    }

    #[test]
    fn test_success_count() {
        assert_eq!(sample().success_count(), 1);
    }
}
