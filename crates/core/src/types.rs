/// Primary key of the `person` table (PostgreSQL `SERIAL`).
pub type DbId = i32;
