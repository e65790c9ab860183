//! Wire-level request and response shapes for the `/people` endpoints.
//!
//! Input DTOs carry their field constraints as `validator` attributes; the
//! API layer runs them before any handler logic executes.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::DbId;

/// Request body for `POST /people`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonCreateDto {
    #[validate(
        custom(function = "not_blank", message = "name is required"),
        length(max = 30, message = "name must be at most 30 characters")
    )]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "email is required"),
        email(message = "email must be a valid email address"),
        length(max = 30, message = "email must be at most 30 characters")
    )]
    pub email: String,
}

/// Request body for `PUT /people/{id}`.
///
/// `id` must equal the path parameter; that check belongs to the handler.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonUpdateDto {
    pub id: DbId,

    #[validate(
        custom(function = "not_blank", message = "name is required"),
        length(max = 30, message = "name must be at most 30 characters")
    )]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "email is required"),
        email(message = "email must be a valid email address"),
        length(max = 30, message = "email must be at most 30 characters")
    )]
    pub email: String,
}

/// Response body for every endpoint that returns a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDisplayDto {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
