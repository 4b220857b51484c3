mod error;
mod file_storage;
mod load_result;
mod memory_storage;

pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileSessionStorage;
pub use load_result::{CorruptedRecord, LoadResult};
pub use memory_storage::MemorySessionStorage;

use crate::UserSession;

use std::sync::Arc;

/// Client-local home of the serialized session record.
pub trait SessionStorage: Send + Sync {
    /// Read the stored record. A missing record is not an error.
    fn load(&self) -> StorageResult<LoadResult>;

    /// Replace the stored record.
    fn save(&self, session: &UserSession) -> StorageResult<()>;

    /// Remove the stored record, if any.
    fn clear(&self) -> StorageResult<()>;

    /// Move an unreadable record out of the way so the next save starts clean.
    fn discard_corrupted(&self) -> StorageResult<()> {
        self.clear()
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn load(&self) -> StorageResult<LoadResult> {
        (**self).load()
    }

    fn save(&self, session: &UserSession) -> StorageResult<()> {
        (**self).save(session)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }

    fn discard_corrupted(&self) -> StorageResult<()> {
        (**self).discard_corrupted()
    }
}
