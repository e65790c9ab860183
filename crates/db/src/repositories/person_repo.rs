//! Repository for the `person` table.

use async_trait::async_trait;
use roster_core::person::Person;
use roster_core::types::DbId;
use sqlx::FromRow;

use crate::{DbPool, StoreError};

/// Column list for `person` queries.
const COLUMNS: &str = "id, name, email";

/// CRUD operations over persisted people.
///
/// `update` and `delete` do not report whether a row matched; callers check
/// existence with `get_by_id` first.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a person and return it with the store-assigned `id`.
    async fn create(&self, person: Person) -> Result<Person, StoreError>;

    /// Returns `None` if no row has this id.
    async fn get_by_id(&self, id: DbId) -> Result<Option<Person>, StoreError>;

    /// All rows, in whatever order the store scans them.
    async fn get_all(&self) -> Result<Vec<Person>, StoreError>;

    /// Overwrite `name` and `email` of the row matching `person.id`.
    ///
    /// Returns the input unchanged, including when no row matched.
    async fn update(&self, person: Person) -> Result<Person, StoreError>;

    async fn delete(&self, id: DbId) -> Result<(), StoreError>;

    /// Cheap liveness probe used by `/health`.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// A row from the `person` table.
#[derive(Debug, FromRow)]
struct PersonRow {
    id: DbId,
    name: String,
    email: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// PostgreSQL-backed [`PersonRepository`].
///
/// Every call checks out its own connection from the pool and holds it for a
/// single statement. The `PoolConnection` guard returns the connection when
/// it drops, which also covers the error and cancellation paths.
#[derive(Clone)]
pub struct PgPersonRepo {
    pool: DbPool,
}

impl PgPersonRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepo {
    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO person (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&person.name)
        .bind(&person.email)
        .fetch_one(&mut *conn)
        .await?;

        tracing::debug!(person_id = id, "Inserted person row");
        Ok(Person { id, ..person })
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Person>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let query = format!("SELECT {COLUMNS} FROM person WHERE id = $1");
        let row = sqlx::query_as::<_, PersonRow>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Person::from))
    }

    async fn get_all(&self) -> Result<Vec<Person>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let query = format!("SELECT {COLUMNS} FROM person");
        let rows = sqlx::query_as::<_, PersonRow>(&query)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn update(&self, person: Person) -> Result<Person, StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("UPDATE person SET name = $2, email = $3 WHERE id = $1")
            .bind(person.id)
            .bind(&person.name)
            .bind(&person.email)
            .execute(&mut *conn)
            .await?;
        Ok(person)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
