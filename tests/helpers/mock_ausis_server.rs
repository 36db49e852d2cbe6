use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::Router;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// How the fake service answers.
#[derive(Clone)]
pub struct MockBehaviour {
    pub upload_status: u16,
    pub error_files: HashSet<String>,
    pub bare_error_files: HashSet<String>,
    pub status_body: Option<serde_json::Value>,
    pub polls_before_complete: usize,
    pub clean_status: u16,
}

impl Default for MockBehaviour {
    fn default() -> Self {
        Self {
            upload_status: 200,
            error_files: HashSet::new(),
            bare_error_files: HashSet::new(),
            status_body: None,
            polls_before_complete: 0,
            clean_status: 200,
        }
    }
}

impl MockBehaviour {
    pub fn with_error_for(mut self, file_name: &str) -> Self {
        self.error_files.insert(file_name.to_string());
        self
    }

    /// Status answers for `file_name` carry only `{"error": ...}`, no status field.
    pub fn with_bare_error_for(mut self, file_name: &str) -> Self {
        self.bare_error_files.insert(file_name.to_string());
        self
    }

    /// Every status answer for a known session is exactly `body`.
    pub fn with_status_body(mut self, body: serde_json::Value) -> Self {
        self.status_body = Some(body);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadRecord {
    pub file_name: String,
    pub recognizer: Option<String>,
    pub speakers: Option<String>,
    pub authorization: Option<String>,
    pub size: usize,
}

#[derive(Default)]
pub struct MockState {
    behaviour: Mutex<MockBehaviour>,
    sessions: Mutex<HashMap<String, String>>,
    polls: Mutex<HashMap<String, usize>>,
    pub uploads: Mutex<Vec<UploadRecord>>,
    pub status_calls: AtomicUsize,
    pub result_calls: AtomicUsize,
    pub clean_calls: AtomicUsize,
    pub legacy_clean_calls: AtomicUsize,
    pub request_times: Mutex<Vec<Instant>>,
}

impl MockState {
    pub fn total_requests(&self) -> usize {
        self.request_times.lock().unwrap().len()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn sorted_request_times(&self) -> Vec<Instant> {
        let mut times = self.request_times.lock().unwrap().clone();
        times.sort();
        times
    }

    fn record_request(&self) {
        self.request_times.lock().unwrap().push(Instant::now());
    }

    fn file_for(&self, id: &str) -> Option<String> {
        self.sessions.lock().unwrap().get(id).cloned()
    }
}

pub struct MockAusisServer {
    pub base_url: String,
    pub state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockAusisServer {
    pub async fn start(behaviour: MockBehaviour) -> Self {
        let state = Arc::new(MockState {
            behaviour: Mutex::new(behaviour),
            ..MockState::default()
        });

        let app = Router::new()
            .route("/ausis/transcriber/upload", post(upload))
            .route("/ausis/status.service/status/{id}", get(status))
            .route("/ausis/result.service/result/{id}/{artifact}", get(result))
            .route("/ausis/clean.service/delete/{id}", delete(clean))
            .route("/ausis/clean.service/{id}", delete(legacy_clean))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
            shutdown: Some(shutdown_tx),
        }
    }
}

impl Drop for MockAusisServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
    }
}

async fn upload(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    state.record_request();

    let mut record = UploadRecord {
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        ..UploadRecord::default()
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("file") => {
                record.file_name = field.file_name().unwrap_or_default().to_string();
                record.size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            }
            Some("recognizer") => record.recognizer = field.text().await.ok(),
            Some("numberOfSpeakers") => record.speakers = field.text().await.ok(),
            _ => {}
        }
    }

    let upload_status = state.behaviour.lock().unwrap().upload_status;
    let file_name = record.file_name.clone();
    let id = {
        let mut uploads = state.uploads.lock().unwrap();
        uploads.push(record);
        format!("session-{}", uploads.len())
    };

    if upload_status != 200 {
        let status = StatusCode::from_u16(upload_status).unwrap();
        return (status, "upload refused").into_response();
    }

    state.sessions.lock().unwrap().insert(id.clone(), file_name);
    (StatusCode::OK, axum::Json(json!({ "id": id }))).into_response()
}

async fn status(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    state.record_request();
    state.status_calls.fetch_add(1, Ordering::SeqCst);

    let Some(file) = state.file_for(&id) else {
        return (StatusCode::NOT_FOUND, "unknown session").into_response();
    };

    let (error_files, bare_error_files, status_body, polls_before_complete) = {
        let behaviour = state.behaviour.lock().unwrap();
        (
            behaviour.error_files.clone(),
            behaviour.bare_error_files.clone(),
            behaviour.status_body.clone(),
            behaviour.polls_before_complete,
        )
    };

    if let Some(body) = status_body {
        return axum::Json(body).into_response();
    }
    if bare_error_files.contains(&file) {
        return axum::Json(json!({ "error": "bad audio" })).into_response();
    }
    if error_files.contains(&file) {
        return axum::Json(json!({ "status": "FAILED", "progress": 0, "error": "bad audio" }))
            .into_response();
    }

    let polls = {
        let mut polls = state.polls.lock().unwrap();
        let count = polls.entry(id).or_insert(0);
        *count += 1;
        *count
    };

    if polls <= polls_before_complete {
        axum::Json(json!({ "status": "TRANSCRIBING", "progress": 50 })).into_response()
    } else {
        axum::Json(json!({ "status": "COMPLETED", "progress": 100, "error": "" })).into_response()
    }
}

async fn result(
    State(state): State<Arc<MockState>>,
    Path((id, artifact)): Path<(String, String)>,
) -> Response {
    state.record_request();
    state.result_calls.fetch_add(1, Ordering::SeqCst);

    match state.file_for(&id) {
        Some(file) => (StatusCode::OK, format!("transcript of {} [{}]", file, artifact)).into_response(),
        None => (StatusCode::NOT_FOUND, "unknown session").into_response(),
    }
}

async fn clean(State(state): State<Arc<MockState>>, Path(_id): Path<String>) -> Response {
    state.record_request();
    state.clean_calls.fetch_add(1, Ordering::SeqCst);
    clean_response(&state)
}

async fn legacy_clean(State(state): State<Arc<MockState>>, Path(_id): Path<String>) -> Response {
    state.record_request();
    state.legacy_clean_calls.fetch_add(1, Ordering::SeqCst);
    clean_response(&state)
}

fn clean_response(state: &MockState) -> Response {
    let clean_status = state.behaviour.lock().unwrap().clean_status;
    let status = StatusCode::from_u16(clean_status).unwrap();
    (status, "").into_response()
}
