//! In-memory [`PersonRepository`] used as a test double.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use roster_core::person::Person;
use roster_core::types::DbId;

use super::PersonRepository;
use crate::StoreError;

#[derive(Debug, Default)]
struct Table {
    last_id: DbId,
    rows: Vec<Person>,
}

/// Stores people in a `Vec` in insertion order and assigns ids from 1 up,
/// mirroring a fresh `SERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepo {
    table: Mutex<Table>,
}

impl InMemoryPersonRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with already-persisted people.
    ///
    /// Subsequent inserts continue after the highest seeded id.
    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
        let rows: Vec<Person> = people.into_iter().collect();
        let last_id = rows.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            table: Mutex::new(Table { last_id, rows }),
        }
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory table lock poisoned".into()))
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepo {
    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        let mut table = self.table()?;
        table.last_id += 1;
        let created = Person {
            id: table.last_id,
            ..person
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Person>, StoreError> {
        Ok(self.table()?.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.table()?.rows.clone())
    }

    async fn update(&self, person: Person) -> Result<Person, StoreError> {
        let mut table = self.table()?;
        if let Some(row) = table.rows.iter_mut().find(|p| p.id == person.id) {
            row.name.clone_from(&person.name);
            row.email.clone_from(&person.email);
        }
        Ok(person)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        self.table()?.rows.retain(|p| p.id != id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.table().map(|_| ())
    }
}
