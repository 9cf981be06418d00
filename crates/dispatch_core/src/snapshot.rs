//! Snapshot input and mission output in the external JSON format.
//!
//! Loading is lenient per record: each incident, responder, destination and
//! stats entry is deserialized on its own, and a record that fails to parse is
//! logged and skipped instead of failing the whole document.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::SnapshotError;
use crate::model::{Destination, Incident, IncidentPriorityStats, Mission, Responder};

/// Everything one dispatch cycle consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchSnapshot {
    pub incidents: Vec<Incident>,
    pub responders: Vec<Responder>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub priority_stats: BTreeMap<String, IncidentPriorityStats>,
    /// Records dropped while loading because they did not parse.
    #[serde(skip)]
    pub skipped_records: usize,
}

impl DispatchSnapshot {
    pub fn new(incidents: Vec<Incident>, responders: Vec<Responder>) -> Self {
        Self {
            incidents,
            responders,
            ..Default::default()
        }
    }

    pub fn with_destinations(mut self, destinations: Vec<Destination>) -> Self {
        self.destinations = destinations;
        self
    }

    pub fn with_priority_stats(mut self, id: impl Into<String>, stats: IncidentPriorityStats) -> Self {
        self.priority_stats.insert(id.into(), stats);
        self
    }

    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        let Value::Object(mut root) = value else {
            return Err(SnapshotError::NotAnObject);
        };
        let mut skipped = 0;

        let incidents = parse_records(root.remove("incidents"), "incident", &mut skipped);
        let responders = parse_records(root.remove("responders"), "responder", &mut skipped);
        let destinations = parse_records(root.remove("destinations"), "destination", &mut skipped);

        let mut priority_stats = BTreeMap::new();
        match root.remove("priorityStats") {
            Some(Value::Object(entries)) => {
                for (id, entry) in entries {
                    match serde_json::from_value::<IncidentPriorityStats>(entry) {
                        Ok(stats) => {
                            priority_stats.insert(id, stats);
                        }
                        Err(error) => {
                            warn!(incident = %id, %error, "skipping unparsable priority stats");
                            skipped += 1;
                        }
                    }
                }
            }
            None | Some(Value::Null) => {}
            Some(_) => {
                warn!("priorityStats is not an object; ignoring it");
                skipped += 1;
            }
        }

        Ok(Self {
            incidents,
            responders,
            destinations,
            priority_stats,
            skipped_records: skipped,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), SnapshotError> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

fn parse_records<T: DeserializeOwned>(value: Option<Value>, kind: &str, skipped: &mut usize) -> Vec<T> {
    let items = match value {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Vec::new(),
        Some(_) => {
            warn!(kind, "expected an array of records; ignoring field");
            *skipped += 1;
            return Vec::new();
        }
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(kind, position, %error, "skipping unparsable record");
                *skipped += 1;
                None
            }
        })
        .collect()
}

/// Write missions as a pretty-printed JSON array.
pub fn write_missions_json<W: Write>(missions: &[Mission], writer: W) -> Result<(), SnapshotError> {
    serde_json::to_writer_pretty(writer, missions)?;
    Ok(())
}
