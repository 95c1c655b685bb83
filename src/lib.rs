pub mod analyzers;
pub mod error;
pub mod loader;
pub mod output;
pub mod record;

/// Human-readable dataset name written into every summary.
pub const DATASET_NAME: &str = "SCANIA Component X";
/// Where the dataset is published.
pub const DATASET_SOURCE: &str = "https://doi.org/10.5878/jvb5-d390";

pub const TTE_FILE: &str = "train_tte.csv";
pub const SPECIFICATIONS_FILE: &str = "train_specifications.csv";
pub const READOUTS_FILE: &str = "train_operational_readouts.csv";

/// Specification column used for the per-category breakdown by default.
pub const DEFAULT_GROUP_FIELD: &str = "Spec_0";
/// Category assigned when a vehicle has no value for the grouping field.
pub const UNKNOWN_CATEGORY: &str = "unknown";
