//! Upload validation and storage key generation for model assets.
//!
//! Both validation gates run before any network call: a rejected upload
//! never touches the object store or the database.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// File extensions accepted for model uploads (lowercase, without the dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["gltf", "glb", "obj", "fbx"];

/// Maximum accepted upload size: 100 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Extract the lowercase extension from a filename.
pub fn file_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit('.').next()?;
    if ext.len() == filename.len() {
        // No dot at all.
        return None;
    }
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate that a filename carries an allowed model extension.
///
/// Returns the normalized (lowercase) extension on success.
pub fn validate_extension(filename: &str) -> Result<String, CoreError> {
    let ext = file_extension(filename).ok_or_else(|| {
        CoreError::Validation(format!(
            "File '{filename}' has no extension. Allowed: {}",
            ALLOWED_EXTENSIONS.join(", ")
        ))
    })?;

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "File type '.{ext}' is not supported. Allowed: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )))
    }
}

/// Validate that an upload does not exceed [`MAX_UPLOAD_BYTES`].
pub fn validate_size(size_bytes: u64) -> Result<(), CoreError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File is {size_bytes} bytes, maximum is {MAX_UPLOAD_BYTES} (100 MiB)"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

/// Replace every non-alphanumeric character in a display name with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Build a collision-resistant object storage key from a display name.
///
/// Format: `<unix-millis>_<sanitized-name>.<ext>`. The timestamp prefix
/// keeps repeated uploads of the same name from overwriting each other.
pub fn storage_key(name: &str, ext: &str, timestamp_millis: i64) -> String {
    format!("{timestamp_millis}_{}.{ext}", sanitize_name(name))
}

/// Derive the object storage key back from a public file URL.
///
/// Keys never contain `/`, so the key is always the last path segment.
pub fn key_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next()?;
    if segment.is_empty() || segment == trimmed {
        return None;
    }
    Some(segment.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_extension ------------------------------------------------

    #[test]
    fn extension_glb_accepted() {
        assert_eq!(validate_extension("chair.glb").unwrap(), "glb");
    }

    #[test]
    fn extension_uppercase_normalized() {
        assert_eq!(validate_extension("SCENE.GLTF").unwrap(), "gltf");
    }

    #[test]
    fn extension_obj_and_fbx_accepted() {
        assert!(validate_extension("mesh.obj").is_ok());
        assert!(validate_extension("rig.fbx").is_ok());
    }

    #[test]
    fn extension_stl_rejected() {
        let err = validate_extension("part.stl").unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn extension_missing_rejected() {
        assert!(validate_extension("noext").is_err());
    }

    #[test]
    fn extension_trailing_dot_rejected() {
        assert!(validate_extension("weird.").is_err());
    }

    #[test]
    fn extension_uses_last_segment() {
        assert_eq!(validate_extension("model.tar.glb").unwrap(), "glb");
    }

    // -- validate_size -----------------------------------------------------

    #[test]
    fn size_at_limit_accepted() {
        assert!(validate_size(MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn size_over_limit_rejected() {
        let err = validate_size(MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(err.to_string().contains("100 MiB"));
    }

    #[test]
    fn size_zero_accepted() {
        assert!(validate_size(0).is_ok());
    }

    // -- sanitize_name / storage_key ---------------------------------------

    #[test]
    fn sanitize_replaces_spaces_and_punctuation() {
        assert_eq!(sanitize_name("Office Chair v2!"), "Office_Chair_v2_");
    }

    #[test]
    fn sanitize_keeps_alphanumerics() {
        assert_eq!(sanitize_name("Chair42"), "Chair42");
    }

    #[test]
    fn storage_key_format() {
        let key = storage_key("My Chair", "glb", 1700000000000);
        assert_eq!(key, "1700000000000_My_Chair.glb");
    }

    // -- key_from_url ------------------------------------------------------

    #[test]
    fn key_from_url_takes_last_segment() {
        let url = "https://cdn.example.com/assets/models/1700000000000_Chair.glb";
        assert_eq!(
            key_from_url(url).unwrap(),
            "1700000000000_Chair.glb"
        );
    }

    #[test]
    fn key_from_url_ignores_trailing_slash() {
        assert_eq!(
            key_from_url("https://x/models/k.glb/").unwrap(),
            "k.glb"
        );
    }

    #[test]
    fn key_from_url_rejects_bare_string() {
        assert!(key_from_url("not-a-url").is_none());
    }

    #[test]
    fn key_round_trips_through_url() {
        let key = storage_key("Desk Lamp", "obj", 42);
        let url = format!("https://store.example.com/public/models/{key}");
        assert_eq!(key_from_url(&url).unwrap(), key);
    }
}
