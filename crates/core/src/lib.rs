//! Pure domain logic for the Camerapedia catalog.
//!
//! Nothing in this crate touches the database or the network: it defines the
//! shared id/timestamp aliases, the domain error enum, the equipment and
//! specification type enumerations, and the validation/coercion rules that the
//! DB and API layers apply before anything is written.

pub mod equipment;
pub mod error;
pub mod fields;
pub mod specification;
pub mod types;
