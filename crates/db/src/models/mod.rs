//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO as received from clients
//! - Where the payload needs validation, a validated insert struct

pub mod brand;
pub mod equipment;
pub mod mount;
pub mod specification;
pub mod tag;
