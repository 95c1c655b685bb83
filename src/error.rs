use std::path::PathBuf;

use thiserror::Error;

/// Domain failures raised while building a dataset summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Dataset directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("table not found: {}", .0.display())]
    MissingTable(PathBuf),
    #[error("vehicle {vehicle_id}: in_study_repair must be a finite number, got {value}")]
    InvalidRepairFlag { vehicle_id: String, value: f64 },
    #[error("event-label table contains no vehicles")]
    EmptyDataset,
}
