use std::collections::{BTreeMap, HashMap};

use crate::UNKNOWN_CATEGORY;
use crate::loader::{SpecTable, TteTable};

/// One vehicle after joining the three training tables.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub vehicle_id: String,
    pub length_of_study: f64,
    pub repaired: bool,
    pub specs: BTreeMap<String, String>,
    /// Last readout time step, 0.0 when the vehicle has no readouts.
    pub max_time_step: f64,
}

impl VehicleRecord {
    /// Value of a specification field, or `"unknown"` when absent.
    pub fn category(&self, field: &str) -> &str {
        self.specs
            .get(field)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY)
    }
}

/// Left-joins specifications and readout maxima onto the event labels.
///
/// The result holds exactly one record per vehicle in `tte`, in the table's
/// iteration order.
pub fn join_records(
    tte: &TteTable,
    specs: &SpecTable,
    maxima: &HashMap<String, f64>,
) -> Vec<VehicleRecord> {
    tte.iter()
        .map(|row| VehicleRecord {
            vehicle_id: row.vehicle_id.clone(),
            length_of_study: row.length_of_study,
            repaired: row.repaired(),
            specs: specs.get(&row.vehicle_id).cloned().unwrap_or_default(),
            max_time_step: maxima.get(&row.vehicle_id).copied().unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::TteRow;

    fn tte_row(id: &str, length: f64, repair: f64) -> TteRow {
        TteRow {
            vehicle_id: id.to_string(),
            length_of_study: length,
            in_study_repair: repair,
        }
    }

    #[test]
    fn test_join_is_left_join_on_event_labels() {
        let tte: TteTable = vec![tte_row("a", 10.0, 0.0), tte_row("b", 20.0, 1.0)]
            .into_iter()
            .collect();

        let mut specs = SpecTable::new();
        specs.insert(
            "a".to_string(),
            BTreeMap::from([("Spec_0".to_string(), "Cat1".to_string())]),
        );
        specs.insert("orphan".to_string(), BTreeMap::new());

        let maxima = HashMap::from([("b".to_string(), 19.5), ("orphan".to_string(), 3.0)]);

        let records = join_records(&tte, &specs, &maxima);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vehicle_id, "a");
        assert_eq!(records[0].category("Spec_0"), "Cat1");
        assert_eq!(records[0].max_time_step, 0.0);
        assert!(!records[0].repaired);

        assert_eq!(records[1].vehicle_id, "b");
        assert_eq!(records[1].category("Spec_0"), "unknown");
        assert_eq!(records[1].max_time_step, 19.5);
        assert!(records[1].repaired);
    }

    #[test]
    fn test_category_missing_field_is_unknown() {
        let record = VehicleRecord {
            vehicle_id: "a".to_string(),
            length_of_study: 1.0,
            repaired: false,
            specs: BTreeMap::from([("Spec_1".to_string(), "Cat2".to_string())]),
            max_time_step: 0.0,
        };

        assert_eq!(record.category("Spec_0"), "unknown");
        assert_eq!(record.category("Spec_1"), "Cat2");
    }
}
