use std::sync::Arc;

use roster_db::repositories::PersonRepository;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the repository sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Data access for people. PostgreSQL in production, in-memory in tests.
    pub people: Arc<dyn PersonRepository>,
}

impl AppState {
    pub fn new(people: Arc<dyn PersonRepository>) -> Self {
        Self { people }
    }
}
