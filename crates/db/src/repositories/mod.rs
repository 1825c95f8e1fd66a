//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The per-model collections
//! (annotations, materials, transforms, groups) expose a single
//! `replace_for_model` reconciliation operation instead of separate
//! delete/insert calls.

pub mod annotation_repo;
pub mod environment_repo;
pub mod group_repo;
pub mod material_repo;
pub mod model_repo;
pub mod transform_repo;

pub use annotation_repo::AnnotationRepo;
pub use environment_repo::EnvironmentRepo;
pub use group_repo::GroupRepo;
pub use material_repo::MaterialRepo;
pub use model_repo::ModelRepo;
pub use transform_repo::TransformRepo;
