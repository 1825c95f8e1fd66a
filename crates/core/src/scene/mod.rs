//! Engine-agnostic scene presentation logic.
//!
//! The renderer itself is external; this module holds the behavior worth
//! keeping out of view code: camera auto-framing and eased transitions,
//! and per-marker interaction state.

pub mod camera;
pub mod marker;

pub use camera::{Aabb, CameraPose, CameraTransition};
pub use marker::MarkerState;
