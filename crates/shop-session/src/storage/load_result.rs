use crate::{StorageError, UserSession};

/// Result of loading a session - distinguishes "not found" from corruption.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub session: Option<UserSession>,
    /// Present if a record exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn found(session: UserSession) -> Self {
        Self {
            session: Some(session),
            corruption_error: None,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            session: None,
            corruption_error: Some(message.into()),
        }
    }
}

/// An unreadable record found while restoring.
#[derive(Debug)]
pub struct CorruptedRecord {
    /// Why the record could not be parsed
    pub reason: String,
    /// Set when the record could not be moved aside
    pub discard_error: Option<StorageError>,
}
