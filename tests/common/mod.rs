#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-process stand-in for the sheet endpoint.
pub struct MockSheet {
    pub url: String,
    state: Arc<Mutex<SheetState>>,
}

struct SheetState {
    rows: Value,
    fetch_status: StatusCode,
    push_status: StatusCode,
    push_body: String,
    pushes: Vec<Value>,
}

pub fn default_rows() -> Value {
    json!([
        ["Zone", "Capacity", "Cars In", "Cars Out", "Available Space"],
        ["Red", 100, 10, 0, 90],
        ["Blue", 50, 5, 0, 45],
        ["Pink", 20, 0, 0, 20]
    ])
}

pub async fn spawn_sheet(rows: Value) -> MockSheet {
    let state = Arc::new(Mutex::new(SheetState {
        rows,
        fetch_status: StatusCode::OK,
        push_status: StatusCode::OK,
        push_body: json!({ "success": true, "message": "updated" }).to_string(),
        pushes: Vec::new(),
    }));

    let app = Router::new()
        .route("/exec", get(get_rows).post(post_update))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock sheet");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock sheet stopped");
    });

    MockSheet {
        url: format!("http://{addr}/exec"),
        state,
    }
}

impl MockSheet {
    pub async fn pushes(&self) -> Vec<Value> {
        self.state.lock().await.pushes.clone()
    }

    pub async fn fail_fetch(&self, status: StatusCode) {
        self.state.lock().await.fetch_status = status;
    }

    pub async fn set_rows(&self, rows: Value) {
        self.state.lock().await.rows = rows;
    }

    pub async fn respond_to_push(&self, status: StatusCode, body: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.push_status = status;
        state.push_body = body.into();
    }
}

async fn get_rows(State(state): State<Arc<Mutex<SheetState>>>) -> Response {
    let state = state.lock().await;
    if !state.fetch_status.is_success() {
        return state.fetch_status.into_response();
    }
    Json(state.rows.clone()).into_response()
}

async fn post_update(
    State(state): State<Arc<Mutex<SheetState>>>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().await;
    state.pushes.push(body);
    (state.push_status, state.push_body.clone()).into_response()
}
