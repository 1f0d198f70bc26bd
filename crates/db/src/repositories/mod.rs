//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod brand_repo;
pub mod equipment_repo;
pub mod mount_repo;
pub mod spec_definition_repo;
pub mod spec_value_repo;
pub mod tag_repo;

pub use brand_repo::BrandRepo;
pub use equipment_repo::EquipmentRepo;
pub use mount_repo::MountRepo;
pub use spec_definition_repo::SpecDefinitionRepo;
pub use spec_value_repo::SpecValueRepo;
pub use tag_repo::TagRepo;
