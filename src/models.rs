use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub cars_in: u32,
    pub cars_out: u32,
    pub available_space: i64,
}

impl Zone {
    /// A fresh zone with no traffic logged against it.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            capacity,
            cars_in: 0,
            cars_out: 0,
            available_space: i64::from(capacity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub zone_id: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub car_count: u32,
    pub date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogRequest {
    pub zone_id: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub car_count: u32,
}

/// Spreadsheet coordinates a zone's values are written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCells {
    pub cars_in_cell: String,
    pub cars_out_cell: String,
    pub capacity_cell: String,
    pub available_space_cell: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddZoneRequest {
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub available_space: Option<i64>,
    #[serde(default)]
    pub cells: Option<ZoneCells>,
}

/// Body POSTed to the sheet endpoint. Field names are fixed by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushPayload {
    pub cars_in_cell: String,
    pub cars_out_cell: String,
    pub capacity_cell: String,
    pub available_space_cell: String,
    pub cars_in: u32,
    pub cars_out: u32,
    pub capacity: u32,
    pub available_space: i64,
}

impl PushPayload {
    pub fn new(cells: &ZoneCells, zone: &Zone) -> Self {
        Self {
            cars_in_cell: cells.cars_in_cell.clone(),
            cars_out_cell: cells.cars_out_cell.clone(),
            capacity_cell: cells.capacity_cell.clone(),
            available_space_cell: cells.available_space_cell.clone(),
            cars_in: zone.cars_in,
            cars_out: zone.cars_out,
            capacity: zone.capacity,
            available_space: zone.available_space,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushAck {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncStatus {
    Pushed { message: Option<String> },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOutcome {
    pub entry: LogEntry,
    pub zone: Zone,
    pub sync: SyncStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryRow {
    pub zone: String,
    #[serde(flatten)]
    pub cells: ZoneCells,
}
