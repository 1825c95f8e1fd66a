//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod annotation;
pub mod model;
pub mod model_environment;
pub mod object_group;
pub mod object_material;
pub mod object_transform;
