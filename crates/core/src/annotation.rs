//! Annotation validation and position encoding.
//!
//! Two position encodings coexist on the wire: a nested `{x, y, z}` object
//! (the shape the viewer works with) and three discrete scalar fields
//! (`position_x`, `position_y`, `position_z`, the canonical storage
//! columns). [`WirePosition`] accepts either and [`Position`] is the single
//! internal shape everything downstream uses.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Object name stored when an annotation was not attached to a named
/// scene-graph node.
pub const PLACEHOLDER_OBJECT_NAME: &str = "unknown";

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A 3D point in model space. Canonical internal representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Position as it may arrive over the wire: either nested or as three
/// discrete scalar fields. Deserialized with `#[serde(flatten)]` from the
/// surrounding annotation payload.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum WirePosition {
    Nested {
        position: Position,
    },
    Scalar {
        position_x: f64,
        position_y: f64,
        position_z: f64,
    },
}

impl From<WirePosition> for Position {
    fn from(wire: WirePosition) -> Self {
        match wire {
            WirePosition::Nested { position } => position,
            WirePosition::Scalar {
                position_x,
                position_y,
                position_z,
            } => Position::new(position_x, position_y, position_z),
        }
    }
}

// ---------------------------------------------------------------------------
// Title validation
// ---------------------------------------------------------------------------

/// Whether an annotation title qualifies for persistence.
///
/// Blank or whitespace-only titles are never written to the store.
pub fn is_persistable_title(title: &str) -> bool {
    !title.trim().is_empty()
}

/// Validate a title, rejecting blank/whitespace-only values.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if is_persistable_title(title) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Annotation title must not be empty".to_string(),
        ))
    }
}

/// Resolve an optional object name to the stored value.
pub fn object_name_or_placeholder(name: Option<String>) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => PLACEHOLDER_OBJECT_NAME.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- WirePosition decoding ---------------------------------------------

    #[test]
    fn nested_position_decodes() {
        let wire: WirePosition =
            serde_json::from_str(r#"{"position": {"x": 1.0, "y": 2.0, "z": 3.0}}"#).unwrap();
        assert_matches!(wire, WirePosition::Nested { .. });
        assert_eq!(Position::from(wire), Position::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn scalar_position_decodes() {
        let wire: WirePosition = serde_json::from_str(
            r#"{"position_x": 1.0, "position_y": 2.0, "position_z": 3.0}"#,
        )
        .unwrap();
        assert_matches!(wire, WirePosition::Scalar { .. });
        assert_eq!(Position::from(wire), Position::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn both_encodings_agree() {
        let nested: WirePosition =
            serde_json::from_str(r#"{"position": {"x": -4.5, "y": 0.0, "z": 9.25}}"#).unwrap();
        let scalar: WirePosition = serde_json::from_str(
            r#"{"position_x": -4.5, "position_y": 0.0, "position_z": 9.25}"#,
        )
        .unwrap();
        assert_eq!(Position::from(nested), Position::from(scalar));
    }

    #[test]
    fn missing_position_rejected() {
        let result: Result<WirePosition, _> = serde_json::from_str(r#"{"other": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn position_serializes_nested() {
        let json = serde_json::to_value(Position::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 2.0, "y": 0.0, "z": 0.0}));
    }

    // -- title validation --------------------------------------------------

    #[test]
    fn non_empty_title_persistable() {
        assert!(is_persistable_title("Leg"));
    }

    #[test]
    fn empty_title_not_persistable() {
        assert!(!is_persistable_title(""));
    }

    #[test]
    fn whitespace_title_not_persistable() {
        assert!(!is_persistable_title("   \t  "));
    }

    #[test]
    fn validate_title_rejects_blank() {
        assert!(validate_title("  ").is_err());
        assert!(validate_title("Seat").is_ok());
    }

    // -- object name -------------------------------------------------------

    #[test]
    fn object_name_defaults_to_placeholder() {
        assert_eq!(object_name_or_placeholder(None), PLACEHOLDER_OBJECT_NAME);
        assert_eq!(
            object_name_or_placeholder(Some("  ".into())),
            PLACEHOLDER_OBJECT_NAME
        );
    }

    #[test]
    fn object_name_kept_when_present() {
        assert_eq!(
            object_name_or_placeholder(Some("SeatMesh".into())),
            "SeatMesh"
        );
    }
}
