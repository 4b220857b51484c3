use crate::{LoadResult, SessionStorage, StorageResult, UserSession};

use std::sync::{Mutex, MutexGuard};

/// Keeps the serialized record in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    json: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with raw JSON, corrupt or not.
    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            json: Mutex::new(Some(json.into())),
        }
    }

    /// The stored JSON, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.json.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> StorageResult<LoadResult> {
        let Some(json) = self.slot().clone() else {
            return Ok(LoadResult::missing());
        };

        Ok(match serde_json::from_str::<UserSession>(&json) {
            Ok(session) => LoadResult::found(session),
            Err(e) => LoadResult::corrupted(e.to_string()),
        })
    }

    fn save(&self, session: &UserSession) -> StorageResult<()> {
        let json = serde_json::to_string(session)?;
        *self.slot() = Some(json);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
