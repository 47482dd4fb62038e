use crate::errors::{SessionError, SyncError};
use crate::models::{
    AddZoneRequest, EventOutcome, LogEntry, LogRequest, PushAck, PushPayload, SyncStatus, Zone,
};
use crate::reconcile::apply_event;
use crate::registry::ZoneRegistry;
use crate::store::{EventLog, ZoneStore};
use crate::sync::SyncClient;
use chrono::Utc;
use tracing::{error, info, warn};

/// Everything one running tracker owns: zones, the event log, the cell
/// registry and the client used to mirror changes to the sheet.
#[derive(Debug)]
pub struct Session {
    store: ZoneStore,
    log: EventLog,
    registry: ZoneRegistry,
    client: SyncClient,
}

impl Session {
    pub fn new(client: SyncClient, registry: ZoneRegistry) -> Self {
        Self {
            store: ZoneStore::default(),
            log: EventLog::default(),
            registry,
            client,
        }
    }

    pub fn zones(&self) -> &[Zone] {
        self.store.zones()
    }

    pub fn log(&self) -> &[LogEntry] {
        self.log.entries()
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// Initial population. A failed fetch leaves the store empty.
    pub async fn load(&mut self) {
        if let Err(err) = self.refresh().await {
            error!("error fetching zones: {err}");
        }
    }

    /// Replaces the store with the sheet's current rows. On failure the
    /// existing zones are kept.
    pub async fn refresh(&mut self) -> Result<&[Zone], SessionError> {
        let zones = self.client.fetch_zones().await?;
        for zone in &zones {
            if !self.registry.contains(&zone.name) {
                warn!("zone '{}' has no registry entry and will not sync", zone.name);
            }
        }
        self.store.replace_all(zones);
        Ok(self.store.zones())
    }

    pub fn add_zone(&mut self, request: AddZoneRequest) -> Result<Zone, SessionError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(SessionError::Invalid("zone name must not be empty".into()));
        }
        if self.store.contains(name) {
            return Err(SessionError::DuplicateZone(name.to_string()));
        }

        let capacity = i64::from(request.capacity);
        if let Some(space) = request.available_space {
            if !(0..=capacity).contains(&space) {
                return Err(SessionError::Invalid(format!(
                    "available_space must be between 0 and {capacity}"
                )));
            }
        }

        match request.cells {
            Some(cells) => {
                if let Some(existing) = self.registry.cells_for(name) {
                    if *existing != cells {
                        return Err(SessionError::Invalid(format!(
                            "zone '{name}' is already bound to other cells"
                        )));
                    }
                }
                if let Some(owner) = self.registry.cell_owner(&cells, name) {
                    return Err(SessionError::Invalid(format!(
                        "cells for '{name}' overlap zone '{owner}'"
                    )));
                }
                self.registry.insert(name, cells);
            }
            None if !self.registry.contains(name) => {
                return Err(SessionError::UnregisteredZone(name.to_string()));
            }
            None => {}
        }

        let mut zone = Zone::new(name, request.capacity);
        if let Some(space) = request.available_space {
            zone.available_space = space;
        }
        self.store.push(zone.clone());
        info!("added zone '{}' with capacity {}", zone.name, zone.capacity);
        Ok(zone)
    }

    /// Logs an event, reconciles the zone and pushes it to the sheet.
    ///
    /// The entry is appended before anything can fail past validation. A
    /// failed push does not roll back the local update; it is reported in
    /// the outcome instead.
    pub async fn log_event(&mut self, request: LogRequest) -> Result<EventOutcome, SessionError> {
        if request.car_count == 0 {
            return Err(SessionError::Invalid("car_count must be greater than zero".into()));
        }

        let entry = LogEntry {
            id: request.zone_id.clone(),
            zone_id: request.zone_id,
            entry_type: request.entry_type,
            car_count: request.car_count,
            date_time: Utc::now(),
        };
        self.log.append(entry.clone());

        let zone = {
            let zone = self
                .store
                .get_mut(&entry.zone_id)
                .ok_or_else(|| SessionError::ZoneNotFound(entry.zone_id.clone()))?;
            apply_event(zone, entry.entry_type, entry.car_count);
            zone.clone()
        };

        let sync = match self.push(&zone).await {
            Ok(ack) => SyncStatus::Pushed {
                message: ack.message,
            },
            Err(err) => {
                error!("error updating sheet for zone '{}': {err}", zone.name);
                SyncStatus::Failed {
                    error: err.to_string(),
                }
            }
        };

        Ok(EventOutcome { entry, zone, sync })
    }

    async fn push(&self, zone: &Zone) -> Result<PushAck, SyncError> {
        let cells = self
            .registry
            .cells_for(&zone.name)
            .ok_or_else(|| SyncError::UnregisteredZone(zone.name.clone()))?;
        self.client
            .push_zone(&zone.name, &PushPayload::new(cells, zone))
            .await
    }
}
