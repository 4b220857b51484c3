use crate::{SessionChange, SessionObserver, SessionStorage, UserSession};

use log::error;

/// Writes the record to storage after each change; clears it on logout.
///
/// Storage failures are logged, the in-memory record stays authoritative.
pub struct PersistOnChange<S> {
    storage: S,
}

impl<S: SessionStorage> PersistOnChange<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: SessionStorage> SessionObserver for PersistOnChange<S> {
    fn on_change(&self, change: SessionChange, session: &UserSession) {
        let result = match change {
            SessionChange::LoggedOut => self.storage.clear(),
            SessionChange::LoggedIn | SessionChange::AccessTokenReplaced => {
                self.storage.save(session)
            }
        };

        if let Err(e) = result {
            error!(
                "Failed to persist session after {change:?}: {e} ({})",
                e.recovery_hint()
            );
        }
    }
}
