use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// In-process stand-in for the remote data service. Serves Feathers-style
/// REST resources backed by an in-memory table per collection; the `job`
/// collection answers `find` with a page envelope, `user` with a bare array,
/// so both response shapes get exercised.
#[derive(Clone, Default)]
pub struct StubService {
    jobs: Arc<Mutex<Table>>,
    users: Arc<Mutex<Table>>,
    failing: Arc<AtomicBool>,
}

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<Value>,
}

impl StubService {
    fn table(&self, resource: &str) -> Option<&Arc<Mutex<Table>>> {
        match resource {
            "job" => Some(&self.jobs),
            "user" => Some(&self.users),
            _ => None,
        }
    }

    /// Make every subsequent request fail with a server error.
    #[allow(dead_code)]
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

pub async fn spawn_stub() -> (String, StubService) {
    let state = StubService::default();
    let app = Router::new()
        .route("/:resource", get(find).post(create))
        .route("/:resource/:id", axum::routing::put(update).delete(remove))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    (format!("http://{}", addr), state)
}

fn guard(state: &StubService) -> Result<(), StatusCode> {
    if state.failing.load(Ordering::SeqCst) {
        Err(StatusCode::INTERNAL_SERVER_ERROR)
    } else {
        Ok(())
    }
}

async fn find(
    State(state): State<StubService>,
    Path(resource): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    guard(&state)?;
    let table = state.table(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let table = table.lock().unwrap();
    let rows = table.rows.clone();
    let body = match resource.as_str() {
        "job" => json!({
            "total": rows.len(),
            "limit": 10,
            "skip": 0,
            "data": rows,
        }),
        _ => Value::Array(rows),
    };
    Ok(Json(body))
}

async fn create(
    State(state): State<StubService>,
    Path(resource): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    guard(&state)?;
    let table = state.table(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let mut table = table.lock().unwrap();
    table.next_id += 1;
    body["id"] = json!(table.next_id);
    table.rows.push(body.clone());
    Ok(Json(body))
}

async fn update(
    State(state): State<StubService>,
    Path((resource, id)): Path<(String, i64)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    guard(&state)?;
    let table = state.table(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let mut table = table.lock().unwrap();
    let row = table
        .rows
        .iter_mut()
        .find(|row| row["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            row[key.as_str()] = value.clone();
        }
    }
    row["id"] = json!(id);
    Ok(Json(row.clone()))
}

async fn remove(
    State(state): State<StubService>,
    Path((resource, id)): Path<(String, i64)>,
) -> Result<Json<Value>, StatusCode> {
    guard(&state)?;
    let table = state.table(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let mut table = table.lock().unwrap();
    let index = table
        .rows
        .iter()
        .position(|row| row["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    let removed = table.rows.remove(index);
    Ok(Json(removed))
}
