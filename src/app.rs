use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/zones", get(handlers::list_zones).post(handlers::add_zone))
        .route("/api/log", get(handlers::list_log).post(handlers::log_event))
        .route("/api/refresh", post(handlers::refresh))
        .route("/api/registry", get(handlers::get_registry))
        .with_state(state)
}
