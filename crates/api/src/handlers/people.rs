//! Handlers for the `/people` resource.
//!
//! Request bodies are validated by [`ValidatedJson`] before a handler runs.
//! Store failures are logged with the operation name and answer `500`.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roster_core::dto::{PersonCreateDto, PersonDisplayDto, PersonUpdateDto};
use roster_core::error::CoreError;
use roster_core::mapper;
use roster_core::person::Person;
use roster_core::types::DbId;
use roster_db::repositories::PersonRepository;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Look up a person or fail with `CoreError::NotFound`.
async fn find_person(
    people: &dyn PersonRepository,
    id: DbId,
    operation: &'static str,
) -> AppResult<Person> {
    people
        .get_by_id(id)
        .await
        .map_err(AppError::store(operation))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
}

/// POST /people
///
/// Create a person. Responds `201` with a `Location` header pointing at the
/// new resource.
pub async fn create_person(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PersonCreateDto>,
) -> AppResult<impl IntoResponse> {
    let person = mapper::create_dto_to_entity(input);
    let created = state
        .people
        .create(person)
        .await
        .map_err(AppError::store("creating person"))?;

    tracing::info!(person_id = created.id, "Person created");

    let location = format!("/people/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(mapper::entity_to_display_dto(created)),
    ))
}

/// PUT /people/{id}
///
/// Replace a person's name and email. The body `id` must match the path.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PersonUpdateDto>,
) -> AppResult<StatusCode> {
    if id != input.id {
        return Err(AppError::BadRequest(format!(
            "Id mismatch: path id {id} does not match body id {}",
            input.id
        )));
    }

    find_person(state.people.as_ref(), id, "updating person").await?;

    // A concurrent delete between the lookup and this call turns the update
    // into a silent no-op.
    state
        .people
        .update(mapper::update_dto_to_entity(input))
        .await
        .map_err(AppError::store("updating person"))?;

    tracing::info!(person_id = id, "Person updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /people/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_person(state.people.as_ref(), id, "deleting person").await?;

    state
        .people
        .delete(id)
        .await
        .map_err(AppError::store("deleting person"))?;

    tracing::info!(person_id = id, "Person deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /people/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonDisplayDto>> {
    let person = find_person(state.people.as_ref(), id, "getting person").await?;
    Ok(Json(mapper::entity_to_display_dto(person)))
}

/// GET /people
///
/// Every person, in store order.
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<PersonDisplayDto>>> {
    let people = state
        .people
        .get_all()
        .await
        .map_err(AppError::store("getting all people"))?;

    Ok(Json(
        people
            .into_iter()
            .map(mapper::entity_to_display_dto)
            .collect(),
    ))
}
