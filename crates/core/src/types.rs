//! Scalar aliases shared across the workspace.

use chrono::{DateTime, Utc};

/// Primary key type for every table (BIGSERIAL).
pub type DbId = i64;

/// Row timestamp, always UTC.
pub type Timestamp = DateTime<Utc>;
