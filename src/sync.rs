//! Client for the spreadsheet-backed endpoint.
//!
//! The endpoint serves the sheet as a JSON array of rows on GET and accepts
//! single-zone cell updates on POST.

use crate::errors::SyncError;
use crate::models::{PushAck, PushPayload, Zone};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SyncClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    success: Option<bool>,
    message: Option<String>,
    error: Option<String>,
}

impl SyncClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SyncError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_zones(&self) -> Result<Vec<Zone>, SyncError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status(status));
        }

        let body: Value = response.json().await?;
        let Value::Array(rows) = body else {
            return Err(SyncError::InvalidResponse("expected an array of rows".into()));
        };

        let zones = parse_rows(&rows);
        info!("fetched {} zones", zones.len());
        Ok(zones)
    }

    pub async fn push_zone(
        &self,
        zone: &str,
        payload: &PushPayload,
    ) -> Result<PushAck, SyncError> {
        info!(
            zone,
            cars_in = payload.cars_in,
            cars_out = payload.cars_out,
            capacity = payload.capacity,
            available_space = payload.available_space,
            "pushing zone to sheet"
        );

        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status(status));
        }

        let text = response.text().await?;
        match serde_json::from_str::<PushResponse>(&text) {
            Ok(PushResponse {
                success: Some(false),
                message,
                error,
            }) => Err(SyncError::Rejected(
                message.or(error).unwrap_or_else(|| "no reason given".into()),
            )),
            Ok(parsed) => Ok(PushAck {
                message: parsed.message,
            }),
            // Some deployments answer with plain text; a 2xx is still an ack.
            Err(_) => Ok(PushAck { message: None }),
        }
    }
}

/// Maps sheet rows to zones. Row 0 is the header.
pub fn parse_rows(rows: &[Value]) -> Vec<Zone> {
    rows.iter()
        .skip(1)
        .enumerate()
        .filter_map(|(index, row)| {
            let zone = parse_row(row);
            if zone.is_none() {
                warn!("skipping sheet row {} without a zone name", index + 2);
            }
            zone
        })
        .collect()
}

fn parse_row(row: &Value) -> Option<Zone> {
    let cells = row.as_array()?;
    let name = match cells.first()? {
        Value::String(name) if !name.trim().is_empty() => name.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };

    Some(Zone {
        id: name.clone(),
        name,
        capacity: counter(cells.get(1)),
        cars_in: counter(cells.get(2)),
        cars_out: counter(cells.get(3)),
        available_space: number(cells.get(4)),
    })
}

/// Finite numbers and numeric strings, truncated; anything else is 0.
fn number(value: Option<&Value>) -> i64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => n.trunc() as i64,
        _ => 0,
    }
}

fn counter(value: Option<&Value>) -> u32 {
    number(value).clamp(0, i64::from(u32::MAX)) as u32
}
