//! shop-session
//!
//! The signed-in user's profile and tokens, owned by a [`SessionStore`]
//! and persisted through a [`SessionStorage`] that observes every change.

pub(crate) mod change;
pub(crate) mod error;
pub(crate) mod persist;
pub(crate) mod session;
pub(crate) mod storage;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use change::{SessionChange, SessionObserver};
pub use error::{Result as SessionResult, SessionError};
pub use persist::PersistOnChange;
pub use session::UserSession;
pub use storage::{
    CorruptedRecord, FileSessionStorage, LoadResult, MemorySessionStorage, SessionStorage,
    StorageError, StorageResult,
};
pub use store::SessionStore;
