//! Measurement groups and dataset files.
//!
//! A [`MeasurementGroup`] maps worker counts to the repeated timing samples
//! taken at that worker count, in a fixed order. A [`Dataset`] is a named
//! collection of groups, loadable from JSON:
//!
//! ```json
//! {
//!   "groups": [
//!     {
//!       "name": "single",
//!       "label": "No Slave",
//!       "series": [ { "workers": 1, "samples": [2313, 2326, 2339] } ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CompareError;
use crate::stats::mean;

/// Repeated timing samples at one worker count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Worker (thread/process) count.
    pub workers: u64,
    /// Timing samples in milliseconds.
    pub samples: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(workers: u64, samples: Vec<f64>) -> Self {
        Self { workers, samples }
    }
}

#[derive(Deserialize)]
struct RawGroup {
    name: String,
    #[serde(default)]
    label: Option<String>,
    series: Vec<Series>,
}

/// Timing samples for one configuration, keyed by worker count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroup")]
pub struct MeasurementGroup {
    name: String,
    label: String,
    series: Vec<Series>,
}

impl TryFrom<RawGroup> for MeasurementGroup {
    type Error = CompareError;

    fn try_from(raw: RawGroup) -> Result<Self, Self::Error> {
        let label = raw.label.unwrap_or_else(|| raw.name.clone());
        Self::new(raw.name, label, raw.series)
    }
}

impl MeasurementGroup {
    /// Build a group, checking that it has at least one series, that worker
    /// counts are unique, and that every sample list is non-empty and finite.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        series: Vec<Series>,
    ) -> Result<Self, CompareError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CompareError::Dataset("group name must not be empty".into()));
        }
        if series.is_empty() {
            return Err(CompareError::Dataset(format!(
                "group '{name}' has no series"
            )));
        }

        let mut seen = HashSet::with_capacity(series.len());
        for s in &series {
            if !seen.insert(s.workers) {
                return Err(CompareError::Dataset(format!(
                    "group '{name}' lists workers={} more than once",
                    s.workers
                )));
            }
            if s.samples.is_empty() {
                return Err(CompareError::Dataset(format!(
                    "group '{name}' has no samples for workers={}",
                    s.workers
                )));
            }
            if s.samples.iter().any(|v| !v.is_finite()) {
                return Err(CompareError::Dataset(format!(
                    "group '{name}' has a non-finite sample for workers={}",
                    s.workers
                )));
            }
        }

        Ok(Self {
            name,
            label: label.into(),
            series,
        })
    }

    /// Short identifier used to select the group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Worker counts in key order.
    #[must_use]
    pub fn workers(&self) -> Vec<u64> {
        self.series.iter().map(|s| s.workers).collect()
    }

    /// Mean of each series, in key order.
    #[must_use]
    pub fn means(&self) -> Vec<f64> {
        // Construction guarantees non-empty sample lists.
        self.series
            .iter()
            .map(|s| mean(&s.samples).unwrap_or(f64::NAN))
            .collect()
    }

    /// Number of worker counts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of samples across all worker counts.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(|s| s.samples.len()).sum()
    }
}

/// A collection of measurement groups with unique names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    groups: Vec<MeasurementGroup>,
}

#[derive(Deserialize)]
struct RawDataset {
    groups: Vec<MeasurementGroup>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate group names.
    pub fn new(groups: Vec<MeasurementGroup>) -> Result<Self, CompareError> {
        let mut seen = HashSet::with_capacity(groups.len());
        for g in &groups {
            if !seen.insert(g.name()) {
                return Err(CompareError::Dataset(format!(
                    "group '{}' is defined more than once",
                    g.name()
                )));
            }
        }
        Ok(Self { groups })
    }

    /// Parse a dataset from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CompareError> {
        let raw: RawDataset =
            serde_json::from_str(json).map_err(|e| CompareError::Dataset(e.to_string()))?;
        Self::new(raw.groups)
    }

    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CompareError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CompareError::Dataset(format!("cannot read {}: {e}", path.display()))
        })?;
        let dataset = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            groups = dataset.groups.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    #[must_use]
    pub fn groups(&self) -> &[MeasurementGroup] {
        &self.groups
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Result<&MeasurementGroup, CompareError> {
        self.groups.iter().find(|g| g.name() == name).ok_or_else(|| {
            let known: Vec<&str> = self.groups.iter().map(MeasurementGroup::name).collect();
            CompareError::Dataset(format!(
                "no group named '{name}' (available: {})",
                known.join(", ")
            ))
        })
    }
}
