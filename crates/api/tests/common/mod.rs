//! Shared helpers for API integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use roster_core::person::Person;
use roster_core::types::DbId;
use roster_db::repositories::{InMemoryPersonRepo, PersonRepository};
use roster_db::StoreError;
use tower::ServiceExt;

use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given repository.
pub fn build_test_app(people: Arc<dyn PersonRepository>) -> Router {
    build_app_router(AppState::new(people), &test_config())
}

/// The two people most tests start from.
pub fn seed_people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "john".into(),
            email: "john@gmail.com".into(),
        },
        Person {
            id: 2,
            name: "john2".into(),
            email: "john2@gmail.com".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Repository doubles
// ---------------------------------------------------------------------------

/// Per-operation call counters.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub create: AtomicUsize,
    pub get_by_id: AtomicUsize,
    pub get_all: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        [
            &self.create,
            &self.get_by_id,
            &self.get_all,
            &self.update,
            &self.delete,
        ]
        .iter()
        .map(|c| c.load(Ordering::SeqCst))
        .sum()
    }
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

/// Wraps an [`InMemoryPersonRepo`] and records every call made to it.
#[derive(Debug, Default)]
pub struct RecordingRepo {
    inner: InMemoryPersonRepo,
    pub calls: CallCounts,
}

impl RecordingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            inner: InMemoryPersonRepo::with_people(people),
            calls: CallCounts::default(),
        }
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersonRepository for RecordingRepo {
    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        bump(&self.calls.create);
        self.inner.create(person).await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Person>, StoreError> {
        bump(&self.calls.get_by_id);
        self.inner.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<Person>, StoreError> {
        bump(&self.calls.get_all);
        self.inner.get_all().await
    }

    async fn update(&self, person: Person) -> Result<Person, StoreError> {
        bump(&self.calls.update);
        self.inner.update(person).await
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        bump(&self.calls.delete);
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.inner.health_check().await
    }
}

/// A repository whose every call fails, optionally after lookups succeed.
///
/// With `lookups_succeed`, `get_by_id` answers from the seeded people so the
/// failure surfaces from the mutation call instead.
#[derive(Debug, Default)]
pub struct FailingRepo {
    lookups: Option<InMemoryPersonRepo>,
}

impl FailingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookups_succeed(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            lookups: Some(InMemoryPersonRepo::with_people(people)),
        }
    }
}

fn connection_refused() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl PersonRepository for FailingRepo {
    async fn create(&self, _person: Person) -> Result<Person, StoreError> {
        Err(connection_refused())
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Person>, StoreError> {
        match &self.lookups {
            Some(repo) => repo.get_by_id(id).await,
            None => Err(connection_refused()),
        }
    }

    async fn get_all(&self) -> Result<Vec<Person>, StoreError> {
        Err(connection_refused())
    }

    async fn update(&self, _person: Person) -> Result<Person, StoreError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: DbId) -> Result<(), StoreError> {
        Err(connection_refused())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(connection_refused())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
