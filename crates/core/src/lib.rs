//! Domain types, validation, and pure scene-presentation logic.
//!
//! Everything in this crate is side-effect free: no I/O, no database, no
//! renderer. The `db` and `api` crates build the persistence and HTTP
//! layers on top of these types.

pub mod annotation;
pub mod draft;
pub mod error;
pub mod material;
pub mod scene;
pub mod types;
pub mod upload;
