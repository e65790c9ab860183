//! Domain types for the roster service.
//!
//! Holds the `Person` entity, the wire DTOs with their declarative
//! constraints, and the pure mapping functions between them.

pub mod dto;
pub mod error;
pub mod mapper;
pub mod person;
pub mod types;
