// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_board::models::{Activity, Directory};
use activity_board::services::ActivitiesClient;
use activity_board::{App, MessageTimings};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory stand-in for the activities backend.
#[derive(Default)]
pub struct BackendState {
    pub activities: Mutex<Directory>,
    pub fetches: AtomicUsize,
    pub mutations: AtomicUsize,
}

pub struct FakeBackend {
    pub url: String,
    pub state: Arc<BackendState>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn fetch_count(&self) -> usize {
        self.state.fetches.load(Ordering::SeqCst)
    }

    pub fn mutation_count(&self) -> usize {
        self.state.mutations.load(Ordering::SeqCst)
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.state.activities.lock().unwrap()[activity]
            .participants
            .clone()
    }

    pub fn client(&self) -> ActivitiesClient {
        ActivitiesClient::new(self.url.clone())
    }

    pub fn app(&self, timings: MessageTimings) -> App {
        App::new(self.client(), timings)
    }
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

async fn list_activities(State(state): State<Arc<BackendState>>) -> Json<Directory> {
    state.fetches.fetch_add(1, Ordering::SeqCst);
    Json(state.activities.lock().unwrap().clone())
}

async fn signup(
    State(state): State<Arc<BackendState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    state.mutations.fetch_add(1, Ordering::SeqCst);
    let mut activities = state.activities.lock().unwrap();
    let Some(activity) = activities.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Activity not found"})),
        );
    };
    if activity.participants.contains(&query.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Student is already signed up"})),
        );
    }
    activity.participants.push(query.email.clone());
    (
        StatusCode::OK,
        Json(json!({"message": format!("Signed up {} for {}", query.email, name)})),
    )
}

async fn unregister(
    State(state): State<Arc<BackendState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    state.mutations.fetch_add(1, Ordering::SeqCst);
    let mut activities = state.activities.lock().unwrap();
    let Some(activity) = activities.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Activity not found"})),
        );
    };
    let Some(index) = activity.participants.iter().position(|p| *p == query.email) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Student is not signed up for this activity"})),
        );
    };
    activity.participants.remove(index);
    (
        StatusCode::OK,
        Json(json!({"message": format!("Unregistered {} from {}", query.email, name)})),
    )
}

/// Serve `router` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start a fake backend holding `directory`.
#[allow(dead_code)]
pub async fn spawn_backend(directory: Directory) -> FakeBackend {
    let state = Arc::new(BackendState {
        activities: Mutex::new(directory),
        ..BackendState::default()
    });

    let router = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
        .with_state(state.clone());

    FakeBackend {
        url: serve(router).await,
        state,
    }
}

/// A URL nothing is listening on.
#[allow(dead_code)]
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn activity(max_participants: i64, participants: &[&str]) -> Activity {
    Activity {
        description: "Weekly meetup".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// A small school directory: Chess Club with one member, Art Club empty.
#[allow(dead_code)]
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory.insert("Chess Club".to_string(), activity(12, &["michael@mergington.edu"]));
    directory.insert("Art Club".to_string(), activity(15, &[]));
    directory
}

/// Timings short enough to observe auto-hide within a test.
#[allow(dead_code)]
pub fn fast_timings() -> MessageTimings {
    MessageTimings {
        signup: Duration::from_millis(200),
        unregister: Duration::from_millis(200),
    }
}

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route this thread's log output into a [`LogCapture`] until the guard drops.
#[allow(dead_code)]
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
