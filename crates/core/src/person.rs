//! The `Person` domain entity.

use crate::types::DbId;

/// In-memory representation of a row in the `person` table.
///
/// `id` is assigned by the store on insert; an entity with `id == 0` has not
/// been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

impl Person {
    /// Build an entity that has not been written to the store yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
