//! Data types used by the summary pipeline.

use serde::ser::{SerializeMap, Serializer};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single row deserialized from `train_tte.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct TteRow {
    pub vehicle_id: String,
    #[serde(rename = "length_of_study_time_step")]
    pub length_of_study: f64,
    /// Read as a float and truncated, so `"1.0"` and `"1"` both count.
    pub in_study_repair: f64,
}

impl TteRow {
    pub fn repaired(&self) -> bool {
        self.in_study_repair.trunc() != 0.0
    }
}

/// The two columns of `train_operational_readouts.csv` the summary needs.
/// The readout counters are ignored.
#[derive(Debug, Deserialize)]
pub struct ReadoutRow {
    pub vehicle_id: String,
    pub time_step: f64,
}

/// Median, mean and range of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub median: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Aggregated statistics for the vehicles sharing one category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub vehicles: usize,
    pub repairs: usize,
    pub repair_rate: f64,
    pub median_length_of_study: f64,
    pub mean_length_of_study: f64,
    pub median_max_time_step: f64,
    pub mean_max_time_step: f64,
}

/// Complete summary of a dataset, written out as the JSON report.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub dataset: String,
    pub source: String,
    pub training_rows: usize,
    pub training_repairs: usize,
    pub training_repair_rate: f64,
    pub length_of_study: Distribution,
    pub max_time_step: Distribution,
    /// Specification column the breakdown is grouped by, e.g. `Spec_0`.
    pub group_field: String,
    /// Per-category breakdown in order of first appearance.
    pub categories: IndexMap<String, CategorySummary>,
}

impl DatasetSummary {
    /// JSON key holding the per-category breakdown: `by_` followed by the
    /// lowercased grouping field.
    pub fn breakdown_key(&self) -> String {
        format!("by_{}", self.group_field.to_lowercase())
    }
}

// Hand-written so the breakdown key follows the grouping field while the
// remaining keys keep their fixed order.
impl Serialize for DatasetSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8))?;
        map.serialize_entry("dataset", &self.dataset)?;
        map.serialize_entry("source", &self.source)?;
        map.serialize_entry("training_rows", &self.training_rows)?;
        map.serialize_entry("training_repairs", &self.training_repairs)?;
        map.serialize_entry("training_repair_rate", &self.training_repair_rate)?;
        map.serialize_entry("length_of_study", &self.length_of_study)?;
        map.serialize_entry("max_time_step", &self.max_time_step)?;
        map.serialize_entry(&self.breakdown_key(), &self.categories)?;
        map.end()
    }
}
