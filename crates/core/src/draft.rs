//! Editor draft lifecycle.
//!
//! In-memory edits are a staging buffer distinct from the server-synced
//! copy. The lifecycle is `Clean → Dirty → Saving → Clean | Error`; a save
//! can only start from `Dirty`, and editing while a save is in flight is
//! rejected rather than silently interleaved.

use crate::error::CoreError;

/// Sync status of a local draft relative to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftStatus {
    /// Local state matches the last server-confirmed state.
    #[default]
    Clean,
    /// Local edits exist that the server has not seen.
    Dirty,
    /// A save is in flight.
    Saving,
    /// The last save failed; local edits are still pending.
    Error,
}

impl DraftStatus {
    /// Record a local edit.
    ///
    /// Allowed from `Clean`, `Dirty`, and `Error`. Rejected while `Saving`.
    pub fn mark_dirty(&mut self) -> Result<(), CoreError> {
        match self {
            DraftStatus::Saving => Err(CoreError::Conflict(
                "Cannot edit while a save is in flight".to_string(),
            )),
            _ => {
                *self = DraftStatus::Dirty;
                Ok(())
            }
        }
    }

    /// Begin a save. Only valid when there are pending edits.
    pub fn begin_save(&mut self) -> Result<(), CoreError> {
        match self {
            DraftStatus::Dirty | DraftStatus::Error => {
                *self = DraftStatus::Saving;
                Ok(())
            }
            DraftStatus::Clean => Err(CoreError::Conflict(
                "Nothing to save: draft is clean".to_string(),
            )),
            DraftStatus::Saving => Err(CoreError::Conflict(
                "A save is already in flight".to_string(),
            )),
        }
    }

    /// The in-flight save succeeded; the draft now matches the server.
    pub fn complete_save(&mut self) -> Result<(), CoreError> {
        match self {
            DraftStatus::Saving => {
                *self = DraftStatus::Clean;
                Ok(())
            }
            _ => Err(CoreError::Conflict(
                "No save in flight to complete".to_string(),
            )),
        }
    }

    /// The in-flight save failed; edits remain pending.
    pub fn fail_save(&mut self) -> Result<(), CoreError> {
        match self {
            DraftStatus::Saving => {
                *self = DraftStatus::Error;
                Ok(())
            }
            _ => Err(CoreError::Conflict(
                "No save in flight to fail".to_string(),
            )),
        }
    }
}
