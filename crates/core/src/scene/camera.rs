//! Camera auto-framing and eased pose transitions.
//!
//! Framing targets an axis-aligned bounding box: camera distance scales
//! with the box's longest dimension (clamped), the current azimuth around
//! the new center is preserved so switching targets pivots rather than
//! jumps, and camera height is floored to keep the camera above ground.
//! Transitions are advanced by wall-clock elapsed seconds, so behavior is
//! frame-rate independent.

use glam::Vec3;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Distance factor applied to the bounding box's longest dimension.
pub const FRAME_DISTANCE_FACTOR: f32 = 1.6;

/// Minimum framing distance from the target center.
pub const MIN_FRAME_DISTANCE: f32 = 2.0;

/// Maximum framing distance from the target center.
pub const MAX_FRAME_DISTANCE: f32 = 50.0;

/// Minimum camera height above the world origin plane.
pub const MIN_CAMERA_HEIGHT: f32 = 0.5;

/// Elevation angle (radians) of the framed camera above the horizontal.
pub const FRAME_ELEVATION: f32 = 0.5;

/// Duration of a camera transition in seconds.
pub const TRANSITION_SECS: f32 = 1.2;

/// Scene object name whose retarget requests are ignored.
pub const GROUND_OBJECT_NAME: &str = "ground";

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn longest_dimension(&self) -> f32 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

/// A camera pose: eye position plus look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

// ---------------------------------------------------------------------------
// Auto-framing
// ---------------------------------------------------------------------------

/// Compute the framed end pose for a bounding box, preserving the current
/// azimuth around the new center.
pub fn frame_target(bounds: &Aabb, current: &CameraPose) -> CameraPose {
    let center = bounds.center();
    let distance = (bounds.longest_dimension() * FRAME_DISTANCE_FACTOR)
        .clamp(MIN_FRAME_DISTANCE, MAX_FRAME_DISTANCE);

    // Azimuth of the current camera around the new center, in the XZ plane.
    // A camera sitting exactly on the new vertical axis has no meaningful
    // azimuth; default to looking down +Z.
    let offset = current.position - center;
    let azimuth = if offset.x == 0.0 && offset.z == 0.0 {
        0.0
    } else {
        offset.x.atan2(offset.z)
    };

    let horizontal = distance * FRAME_ELEVATION.cos();
    let position = Vec3::new(
        center.x + horizontal * azimuth.sin(),
        (center.y + distance * FRAME_ELEVATION.sin()).max(MIN_CAMERA_HEIGHT),
        center.z + horizontal * azimuth.cos(),
    );

    CameraPose::new(position, center)
}

/// Symmetric quadratic ease-in/ease-out on `t ∈ [0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Transition controller
// ---------------------------------------------------------------------------

/// Drives one camera transition at a time.
///
/// A retarget while a transition is in flight is dropped, not queued and
/// not interrupted. Retargets naming the ground plane are dropped too.
#[derive(Debug, Default)]
pub struct CameraTransition {
    animation: Option<Animation>,
}

#[derive(Debug)]
struct Animation {
    start: CameraPose,
    end: CameraPose,
    elapsed: f32,
}

impl CameraTransition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transition is currently in flight.
    pub fn is_active(&self) -> bool {
        self.animation.is_some()
    }

    /// Begin a transition from `current` to the frame of `bounds`.
    ///
    /// Returns `false` when the request was dropped (already animating, or
    /// the target is the ground plane).
    pub fn retarget(&mut self, object_name: &str, bounds: &Aabb, current: &CameraPose) -> bool {
        if object_name == GROUND_OBJECT_NAME {
            return false;
        }
        if self.is_active() {
            return false;
        }
        self.animation = Some(Animation {
            start: *current,
            end: frame_target(bounds, current),
            elapsed: 0.0,
        });
        true
    }

    /// Advance by `dt` seconds of wall-clock time.
    ///
    /// Returns the pose for this frame, or `None` when idle. The final pose
    /// is returned exactly once, after which the controller is idle again.
    pub fn advance(&mut self, dt: f32) -> Option<CameraPose> {
        let anim = self.animation.as_mut()?;
        anim.elapsed += dt.max(0.0);

        if anim.elapsed >= TRANSITION_SECS {
            let end = anim.end;
            self.animation = None;
            return Some(end);
        }

        let t = ease_in_out_quad(anim.elapsed / TRANSITION_SECS);
        Some(anim.start.lerp(&anim.end, t))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
