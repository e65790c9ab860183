//! Data access for the `person` table.
//!
//! [`PersonRepository`] is the seam the API layer depends on. [`PgPersonRepo`]
//! talks to PostgreSQL; [`InMemoryPersonRepo`] is the fake used in tests.

pub mod memory;
pub mod person_repo;

pub use memory::InMemoryPersonRepo;
pub use person_repo::{PersonRepository, PgPersonRepo};
