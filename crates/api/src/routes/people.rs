//! Route definitions for the `/people` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// ```text
/// GET    /people        -> list_people
/// POST   /people        -> create_person
/// GET    /people/{id}   -> get_person
/// PUT    /people/{id}   -> update_person
/// DELETE /people/{id}   -> delete_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/people",
            get(people::list_people).post(people::create_person),
        )
        .route(
            "/people/{id}",
            get(people::get_person)
                .put(people::update_person)
                .delete(people::delete_person),
        )
}
