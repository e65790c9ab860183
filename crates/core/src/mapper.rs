//! Conversions between the wire DTOs and the `Person` entity.

use crate::dto::{PersonCreateDto, PersonDisplayDto, PersonUpdateDto};
use crate::person::Person;

/// Build an unsaved entity from a create request. `id` stays `0`.
pub fn create_dto_to_entity(dto: PersonCreateDto) -> Person {
    Person::new(dto.name, dto.email)
}

pub fn update_dto_to_entity(dto: PersonUpdateDto) -> Person {
    Person {
        id: dto.id,
        name: dto.name,
        email: dto.email,
    }
}

pub fn entity_to_display_dto(person: Person) -> PersonDisplayDto {
    PersonDisplayDto {
        id: person.id,
        name: person.name,
        email: person.email,
    }
}
