use crate::analyzers::aggregate::summarize;
use crate::analyzers::types::DatasetSummary;
use crate::error::SummaryError;
use crate::loader::{read_max_time_steps, read_specifications, read_train_tte};
use crate::record::join_records;
use crate::{READOUTS_FILE, SPECIFICATIONS_FILE, TTE_FILE};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Loads the three training tables from `src`, joins them and summarizes the
/// result grouped by `group_field`.
#[tracing::instrument(skip(src), fields(src = %src.display()))]
pub fn build_summary(src: &Path, group_field: &str) -> Result<DatasetSummary> {
    if !src.is_dir() {
        return Err(SummaryError::SourceNotFound(src.to_path_buf()).into());
    }

    let tte = read_train_tte(&src.join(TTE_FILE))?;
    let specs = read_specifications(&src.join(SPECIFICATIONS_FILE))?;
    let maxima = read_max_time_steps(&src.join(READOUTS_FILE))?;

    let records = join_records(&tte, &specs, &maxima);
    let missing_specs = records.iter().filter(|r| r.specs.is_empty()).count();
    info!(
        vehicles = records.len(),
        specified = specs.len(),
        with_readouts = maxima.len(),
        missing_specs,
        "Tables joined"
    );

    let summary = summarize(&records, group_field)?;
    info!(
        categories = summary.categories.len(),
        repairs = summary.training_repairs,
        "Summary computed"
    );
    Ok(summary)
}
