use crate::errors::AppError;
use crate::models::{AddZoneRequest, EventOutcome, LogEntry, LogRequest, RegistryRow, Zone};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_zones(State(state): State<AppState>) -> Json<Vec<Zone>> {
    let session = state.session.lock().await;
    Json(session.zones().to_vec())
}

pub async fn add_zone(
    State(state): State<AppState>,
    Json(payload): Json<AddZoneRequest>,
) -> Result<(StatusCode, Json<Zone>), AppError> {
    let mut session = state.session.lock().await;
    let zone = session.add_zone(payload)?;
    Ok((StatusCode::CREATED, Json(zone)))
}

pub async fn list_log(State(state): State<AppState>) -> Json<Vec<LogEntry>> {
    let session = state.session.lock().await;
    Json(session.log().to_vec())
}

pub async fn log_event(
    State(state): State<AppState>,
    Json(payload): Json<LogRequest>,
) -> Result<Json<EventOutcome>, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session.log_event(payload).await?;
    Ok(Json(outcome))
}

pub async fn refresh(State(state): State<AppState>) -> Result<Json<Vec<Zone>>, AppError> {
    let mut session = state.session.lock().await;
    let zones = session.refresh().await?;
    Ok(Json(zones.to_vec()))
}

pub async fn get_registry(State(state): State<AppState>) -> Json<Vec<RegistryRow>> {
    let session = state.session.lock().await;
    Json(session.registry().rows())
}
