//! Model to entity mappers
//!
//! Conversions from database rows to domain objects. Rows carrying an enum
//! column (reaction/alarm kind) convert fallibly, surfacing unknown values as
//! a database error instead of a panic.

mod alarm;
mod reaction;
mod todo;
mod user;
