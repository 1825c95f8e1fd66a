//! Interaction state for annotation markers.
//!
//! Each annotation renders as a small emissive sphere. Hover and selection
//! are independent per marker; nothing at this layer enforces a
//! single-selection constraint, so several labels may be visible at once.

/// Emissive intensity of an idle marker.
pub const BASE_EMISSIVE: f32 = 0.4;

/// Emissive intensity while hovered.
pub const HOVER_EMISSIVE: f32 = 1.2;

/// Emissive intensity while selected (overrides hover).
pub const SELECTED_EMISSIVE: f32 = 1.6;

/// Per-marker hover/selection state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkerState {
    pub hovered: bool,
    pub selected: bool,
}

impl MarkerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Toggle selection, returning the new state.
    pub fn toggle_selected(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// Emissive intensity for the marker sphere in its current state.
    pub fn emissive_intensity(&self) -> f32 {
        if self.selected {
            SELECTED_EMISSIVE
        } else if self.hovered {
            HOVER_EMISSIVE
        } else {
            BASE_EMISSIVE
        }
    }

    /// Whether the floating title/description card is shown.
    pub fn label_visible(&self) -> bool {
        self.hovered || self.selected
    }
}
