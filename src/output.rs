//! JSON report output for dataset summaries.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::DatasetSummary;

/// Renders a summary as JSON indented by two spaces.
pub fn render_json(summary: &DatasetSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Writes a summary to `path` as indented JSON, replacing any existing file.
///
/// Creates missing parent directories.
pub fn write_summary(path: &Path, summary: &DatasetSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = render_json(summary)?;
    debug!(path = %path.display(), bytes = json.len(), "Writing summary");
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{CategorySummary, Distribution};
    use indexmap::IndexMap;

    fn sample_summary() -> DatasetSummary {
        let dist = Distribution {
            median: 20.0,
            mean: 20.0,
            min: 10.0,
            max: 30.0,
        };
        DatasetSummary {
            dataset: "SCANIA Component X".to_string(),
            source: "https://doi.org/10.5878/jvb5-d390".to_string(),
            training_rows: 3,
            training_repairs: 2,
            training_repair_rate: 2.0 / 3.0,
            length_of_study: dist.clone(),
            max_time_step: dist,
            group_field: "Spec_0".to_string(),
            categories: IndexMap::from([(
                "Cat0".to_string(),
                CategorySummary {
                    vehicles: 3,
                    repairs: 2,
                    repair_rate: 2.0 / 3.0,
                    median_length_of_study: 20.0,
                    mean_length_of_study: 20.0,
                    median_max_time_step: 20.0,
                    mean_max_time_step: 20.0,
                },
            )]),
        }
    }

    #[test]
    fn test_render_json_key_order() {
        let json = render_json(&sample_summary()).unwrap();

        let keys = [
            "\"dataset\"",
            "\"source\"",
            "\"training_rows\"",
            "\"training_repairs\"",
            "\"training_repair_rate\"",
            "\"length_of_study\"",
            "\"max_time_step\"",
            "\"by_spec_0\"",
        ];
        let positions: Vec<_> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_json_two_space_indent() {
        let json = render_json(&sample_summary()).unwrap();

        assert!(json.starts_with("{\n  \"dataset\": \"SCANIA Component X\","));
        assert!(json.contains("\n    \"Cat0\": {\n      \"vehicles\": 3,"));
        assert!(json.contains("\"training_rows\": 3,"));
        assert!(json.contains("\"median\": 20.0,"));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn test_write_summary_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/summary.json");

        write_summary(&path, &sample_summary()).unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["training_rows"], 3);
    }

    #[test]
    fn test_write_summary_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        fs::write(&path, "stale contents that are longer than nothing at all").unwrap();

        write_summary(&path, &sample_summary()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, render_json(&sample_summary()).unwrap());
    }
}
