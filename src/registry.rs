use crate::models::{RegistryRow, ZoneCells};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Zone name to sheet cell lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneRegistry {
    entries: BTreeMap<String, ZoneCells>,
}

impl ZoneRegistry {
    /// The three zones the sheet was laid out for. Row 1 is the header.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for (name, row) in [("Red", 2), ("Blue", 3), ("Pink", 4)] {
            registry.insert(name, ZoneCells::for_row(row));
        }
        registry
    }

    pub fn from_entries(entries: BTreeMap<String, ZoneCells>) -> Self {
        Self { entries }
    }

    pub fn cells_for(&self, zone: &str) -> Option<&ZoneCells> {
        self.entries.get(zone)
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.entries.contains_key(zone)
    }

    /// The first other zone writing to any of `cells`.
    pub fn cell_owner(&self, cells: &ZoneCells, except: &str) -> Option<&str> {
        let wanted = cells.all();
        self.entries
            .iter()
            .filter(|(zone, _)| zone.as_str() != except)
            .find(|(_, taken)| taken.all().iter().any(|cell| wanted.contains(cell)))
            .map(|(zone, _)| zone.as_str())
    }

    pub fn insert(&mut self, zone: impl Into<String>, cells: ZoneCells) {
        self.entries.insert(zone.into(), cells);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self) -> Vec<RegistryRow> {
        self.entries
            .iter()
            .map(|(zone, cells)| RegistryRow {
                zone: zone.clone(),
                cells: cells.clone(),
            })
            .collect()
    }
}

impl ZoneCells {
    /// Columns B..E of a sheet row: capacity, cars in, cars out, available.
    pub fn for_row(row: u32) -> Self {
        Self {
            capacity_cell: format!("B{row}"),
            cars_in_cell: format!("C{row}"),
            cars_out_cell: format!("D{row}"),
            available_space_cell: format!("E{row}"),
        }
    }

    fn all(&self) -> [&str; 4] {
        [
            self.cars_in_cell.as_str(),
            self.cars_out_cell.as_str(),
            self.capacity_cell.as_str(),
            self.available_space_cell.as_str(),
        ]
    }
}

/// Reads a `{ "<zone>": { ..cells } }` file, falling back to the built-in
/// table when the file is missing or unreadable.
pub async fn load_registry(path: &Path) -> ZoneRegistry {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, ZoneCells>>(&bytes) {
            Ok(entries) => {
                info!("loaded {} registry entries from {}", entries.len(), path.display());
                ZoneRegistry::from_entries(entries)
            }
            Err(err) => {
                error!("failed to parse registry file: {err}");
                ZoneRegistry::builtin()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("registry file {} not found, using built-in table", path.display());
            ZoneRegistry::builtin()
        }
        Err(err) => {
            error!("failed to read registry file: {err}");
            ZoneRegistry::builtin()
        }
    }
}
