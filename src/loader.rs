//! CSV loaders for the three training tables.
//!
//! Every loader keys its rows by `vehicle_id`. Missing columns surface as
//! CSV deserialization errors. Beyond that, only the repair flag is checked.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::{ReadoutRow, TteRow};
use crate::error::SummaryError;

/// Specification fields (every column except `vehicle_id`) per vehicle.
pub type SpecTable = HashMap<String, BTreeMap<String, String>>;

/// Event labels keyed by vehicle, iterated in order of first appearance.
///
/// A vehicle listed twice keeps its last row but its original position.
#[derive(Debug, Default)]
pub struct TteTable {
    rows: IndexMap<String, TteRow>,
}

impl TteTable {
    pub fn insert(&mut self, row: TteRow) {
        self.rows.insert(row.vehicle_id.clone(), row);
    }

    pub fn get(&self, vehicle_id: &str) -> Option<&TteRow> {
        self.rows.get(vehicle_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TteRow> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<TteRow> for TteTable {
    fn from_iter<I: IntoIterator<Item = TteRow>>(iter: I) -> Self {
        let mut table = TteTable::default();
        for row in iter {
            table.insert(row);
        }
        table
    }
}

fn open_table(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(SummaryError::MissingTable(path.to_path_buf()).into());
    }
    File::open(path).with_context(|| format!("failed to open {}", path.display()))
}

/// Loads `train_tte.csv`.
pub fn read_train_tte(path: &Path) -> Result<TteTable> {
    let file = open_table(path)?;
    read_train_tte_from_reader(file)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_train_tte_from_reader<R: Read>(reader: R) -> Result<TteTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut table = TteTable::default();
    let mut rows = 0usize;

    for result in rdr.deserialize() {
        let record: TteRow = result?;
        if !record.in_study_repair.is_finite() {
            return Err(SummaryError::InvalidRepairFlag {
                vehicle_id: record.vehicle_id,
                value: record.in_study_repair,
            }
            .into());
        }
        table.insert(record);
        rows += 1;
    }

    debug!(rows, vehicles = table.len(), "Loaded event labels");
    Ok(table)
}

/// Loads `train_specifications.csv`.
pub fn read_specifications(path: &Path) -> Result<SpecTable> {
    let file = open_table(path)?;
    read_specifications_from_reader(file)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_specifications_from_reader<R: Read>(reader: R) -> Result<SpecTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut specs = SpecTable::new();

    for result in rdr.deserialize() {
        let mut record: BTreeMap<String, String> = result?;
        let vehicle_id = record
            .remove("vehicle_id")
            .context("missing field `vehicle_id`")?;
        specs.insert(vehicle_id, record);
    }

    debug!(vehicles = specs.len(), "Loaded specifications");
    Ok(specs)
}

/// Loads `train_operational_readouts.csv`, keeping the largest `time_step`
/// seen for each vehicle.
pub fn read_max_time_steps(path: &Path) -> Result<HashMap<String, f64>> {
    let file = open_table(path)?;
    read_max_time_steps_from_reader(file)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_max_time_steps_from_reader<R: Read>(reader: R) -> Result<HashMap<String, f64>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut maxima: HashMap<String, f64> = HashMap::new();
    let mut rows = 0usize;

    for result in rdr.deserialize() {
        let record: ReadoutRow = result?;
        rows += 1;
        maxima
            .entry(record.vehicle_id)
            .and_modify(|current| {
                if record.time_step > *current {
                    *current = record.time_step;
                }
            })
            .or_insert(record.time_step);
    }

    debug!(rows, vehicles = maxima.len(), "Loaded readout maxima");
    Ok(maxima)
}
