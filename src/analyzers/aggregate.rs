use crate::analyzers::types::{CategorySummary, DatasetSummary, Distribution};
use crate::analyzers::utility::{max, mean, median, min};
use crate::error::SummaryError;
use crate::record::VehicleRecord;
use crate::{DATASET_NAME, DATASET_SOURCE};
use indexmap::IndexMap;
use tracing::debug;

/// Column values collected for one category before summarizing.
#[derive(Default)]
struct Bucket {
    lengths: Vec<f64>,
    max_time_steps: Vec<f64>,
    repairs: usize,
}

impl Bucket {
    fn push(&mut self, record: &VehicleRecord) {
        self.lengths.push(record.length_of_study);
        self.max_time_steps.push(record.max_time_step);
        if record.repaired {
            self.repairs += 1;
        }
    }

    fn summarize(&self) -> Option<CategorySummary> {
        if self.lengths.is_empty() {
            return None;
        }
        let vehicles = self.lengths.len();

        Some(CategorySummary {
            vehicles,
            repairs: self.repairs,
            repair_rate: self.repairs as f64 / vehicles as f64,
            median_length_of_study: median(&self.lengths),
            mean_length_of_study: mean(&self.lengths),
            median_max_time_step: median(&self.max_time_steps),
            mean_max_time_step: mean(&self.max_time_steps),
        })
    }
}

fn distribution(values: &[f64]) -> Distribution {
    Distribution {
        median: median(values),
        mean: mean(values),
        min: min(values),
        max: max(values),
    }
}

/// Groups records by the value of `field`, falling back to `"unknown"`, and
/// summarizes each group. Categories come back in the order their first
/// vehicle appears in `records`.
pub fn aggregate_by_category(
    records: &[VehicleRecord],
    field: &str,
) -> IndexMap<String, CategorySummary> {
    let mut buckets: IndexMap<&str, Bucket> = IndexMap::new();

    for record in records {
        buckets.entry(record.category(field)).or_default().push(record);
    }

    buckets
        .into_iter()
        .filter_map(|(category, bucket)| {
            let summary = bucket.summarize()?;
            debug!(category, vehicles = summary.vehicles, "Category summarized");
            Some((category.to_string(), summary))
        })
        .collect()
}

/// Computes the overall statistics plus the per-category breakdown on `field`.
///
/// # Errors
///
/// Returns [`SummaryError::EmptyDataset`] when `records` is empty.
pub fn summarize(records: &[VehicleRecord], field: &str) -> anyhow::Result<DatasetSummary> {
    let mut overall = Bucket::default();
    for record in records {
        overall.push(record);
    }

    let Some(totals) = overall.summarize() else {
        return Err(SummaryError::EmptyDataset.into());
    };

    Ok(DatasetSummary {
        dataset: DATASET_NAME.to_string(),
        source: DATASET_SOURCE.to_string(),
        training_rows: totals.vehicles,
        training_repairs: totals.repairs,
        training_repair_rate: totals.repair_rate,
        length_of_study: distribution(&overall.lengths),
        max_time_step: distribution(&overall.max_time_steps),
        group_field: field.to_string(),
        categories: aggregate_by_category(records, field),
    })
}
